//! End-to-end pipeline tests: expression text in, display text out.

use reckoner_eval::{Base, CalcMode, EvalConfig, FunctionRegistry, evaluate_expression};

fn eval(expr: &str) -> String {
    let reg = FunctionRegistry::with_builtins();
    evaluate_expression(expr, &EvalConfig::default(), &reg).unwrap()
}

fn eval_err(expr: &str) -> String {
    let reg = FunctionRegistry::with_builtins();
    evaluate_expression(expr, &EvalConfig::default(), &reg)
        .unwrap_err()
        .sentinel()
}

#[test]
fn arithmetic() {
    assert_eq!(eval("3+4"), "7");
    assert_eq!(eval("2+3*4"), "14");
    assert_eq!(eval("(2+3)*4"), "20");
    assert_eq!(eval("7/2"), "3.5");
    assert_eq!(eval("10%3"), "1");
    assert_eq!(eval("2**10"), "1024");
    assert_eq!(eval(" 1 + 2 "), "3");
}

#[test]
fn unary_and_chained_power() {
    assert_eq!(eval("-5+3"), "-2");
    assert_eq!(eval("-2**2"), "4");
    assert_eq!(eval("2**-2"), "0.25");
    assert_eq!(eval("2**3**2"), "512");
}

#[test]
fn float_noise_is_rounded_away() {
    assert_eq!(eval("0.1+0.2"), "0.3");
}

#[test]
fn constants_are_expanded() {
    // constants expand to full precision; display rounds to 12 places
    assert_eq!(eval("π"), "3.14159265359");
    assert_eq!(eval("2*π"), "6.28318530718");
    assert_eq!(eval("e"), "2.718281828459");
    // scientific notation 'e' is untouched
    assert_eq!(eval("1e3"), "1000");
    // a constant glued to a digit is not a number
    assert_eq!(eval_err("2π"), "Error");
    assert_eq!(eval_err("2e-1"), "Error");
}

#[test]
fn macro_functions() {
    assert_eq!(eval("5C(2)"), "10");
    assert_eq!(eval("5P(2)"), "20");
    assert_eq!(eval("gcd(12,18)"), "6");
    assert_eq!(eval("lcm(4,6)"), "12");
    assert_eq!(eval("ncr(5,2)+npr(5,2)"), "30");
}

#[test]
fn scientific_notation_thresholds() {
    assert_eq!(eval("2*10**16"), "2.0000000000e+16");
    assert_eq!(eval("10**-11"), "1.0000000000e-11");
    assert_eq!(eval("10**15"), "1000000000000000");
}

#[test]
fn evaluation_failures_surface_as_error() {
    assert_eq!(eval_err("1/0"), "Error");
    assert_eq!(eval_err("0/0"), "Error");
    assert_eq!(eval_err("2+*3"), "Error");
    assert_eq!(eval_err("(1+2"), "Error");
    assert_eq!(eval_err("nope(1)"), "Error");
    assert_eq!(eval_err("gcd(1)"), "Error");
}

#[test]
fn programming_mode_renders_in_base() {
    let reg = FunctionRegistry::with_builtins();
    let mut cfg = EvalConfig {
        mode: CalcMode::Programming,
        ..EvalConfig::default()
    };

    cfg.base = Base::Hex;
    assert_eq!(evaluate_expression("250+5", &cfg, &reg).unwrap(), "FF");
    cfg.base = Base::Bin;
    assert_eq!(evaluate_expression("4+1", &cfg, &reg).unwrap(), "101");
    cfg.base = Base::Oct;
    assert_eq!(evaluate_expression("8*8", &cfg, &reg).unwrap(), "100");
    // the result is floored first
    cfg.base = Base::Dec;
    assert_eq!(evaluate_expression("7/2", &cfg, &reg).unwrap(), "3");
}

#[test]
fn formatted_results_reparse() {
    // a formatted decimal result feeds back through the pipeline unchanged
    let first = eval("1/3");
    let second = eval(&first);
    assert_eq!(first, second);
}
