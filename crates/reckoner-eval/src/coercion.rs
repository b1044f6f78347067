use reckoner_common::{CalcError, Value};

/// Coerce a value to a number, propagating carried errors.
pub(crate) fn coerce_num(v: &Value) -> Result<f64, CalcError> {
    match v {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(CalcError::new_value().with_message(format!("expected a number, got {other}"))),
    }
}
