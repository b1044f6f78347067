use crate::coercion::coerce_num;
use crate::config::{CalcMode, EvalConfig};
use crate::format;
use crate::function_registry::FunctionRegistry;
use crate::preprocess::preprocess;
use reckoner_common::{CalcError, Value};
use reckoner_parse::parser::{ASTNode, ASTNodeType, Parser};
use reckoner_parse::tokenizer::Tokenizer;

pub struct Interpreter<'a> {
    registry: &'a FunctionRegistry,
}

impl<'a> Interpreter<'a> {
    pub fn new(registry: &'a FunctionRegistry) -> Self {
        Self { registry }
    }

    /* ===================  public  =================== */
    pub fn evaluate_ast(&self, node: &ASTNode) -> Result<Value, CalcError> {
        match &node.node_type {
            ASTNodeType::Literal(v) => Ok(v.clone()),
            ASTNodeType::UnaryOp { op, expr } => self.eval_unary(op, expr),
            ASTNodeType::BinaryOp { op, left, right } => self.eval_binary(op, left, right),
            ASTNodeType::Function { name, args } => self.eval_function(name, args),
        }
    }

    /* ===================  unary ops  =================== */
    fn eval_unary(&self, op: &str, expr: &ASTNode) -> Result<Value, CalcError> {
        let n = coerce_num(&self.evaluate_ast(expr)?)?;
        match op {
            "+" => Ok(Value::Number(n)),
            "-" => Ok(Value::Number(-n)),
            _ => Err(CalcError::new_syntax().with_message(format!("Unary op '{op}'"))),
        }
    }

    /* ===================  binary ops  =================== */
    fn eval_binary(&self, op: &str, left: &ASTNode, right: &ASTNode) -> Result<Value, CalcError> {
        let l = coerce_num(&self.evaluate_ast(left)?)?;
        let r = coerce_num(&self.evaluate_ast(right)?)?;

        // Zero denominators are not special-cased: they produce non-finite
        // floats that the formatting layer reports.
        let result = match op {
            "+" => l + r,
            "-" => l - r,
            "*" => l * r,
            "/" => l / r,
            "%" => l % r,
            "**" => l.powf(r),
            _ => {
                return Err(CalcError::new_syntax().with_message(format!("Binary op '{op}'")));
            }
        };
        Ok(Value::Number(result))
    }

    /* ===================  functions  =================== */
    fn eval_function(&self, name: &str, args: &[ASTNode]) -> Result<Value, CalcError> {
        let Some(f) = self.registry.get(name) else {
            return Err(CalcError::new_unknown().with_message(format!("'{name}'")));
        };

        if args.len() < f.min_args() || (!f.variadic() && args.len() > f.min_args()) {
            return Err(CalcError::new_value().with_message(format!(
                "{} expects {} argument(s), got {}",
                f.name(),
                f.min_args(),
                args.len()
            )));
        }

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.evaluate_ast(arg)?);
        }
        f.eval(&values)
    }
}

/// Run the full pipeline: preprocess → tokenize → parse → interpret → format.
///
/// In programming mode the numeric result is floored and rendered in the
/// configured base; otherwise it goes through decimal formatting.
pub fn evaluate_expression(
    expr: &str,
    config: &EvalConfig,
    registry: &FunctionRegistry,
) -> Result<String, CalcError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("evaluate_expression", expr).entered();

    let rewritten = preprocess(expr);
    let tokens = Tokenizer::new(&rewritten)
        .map_err(|e| CalcError::new_syntax().with_message(e.message))?
        .items;
    let ast = Parser::new(tokens, false)
        .parse()
        .map_err(|e| CalcError::new_syntax().with_message(e.message))?;
    let value = Interpreter::new(registry).evaluate_ast(&ast)?;
    let n = coerce_num(&value)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(result = n, "evaluated");

    if config.mode == CalcMode::Programming {
        format::format_in_base(n, config.base)
    } else {
        format::format_number(n)
    }
}
