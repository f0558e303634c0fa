//! Fold state slots, including the infinity sentinels.

use cumulant_expr::Value;
use std::fmt;

/// One state (or initial) slot of a fold function.
///
/// The infinity sentinels are an explicit tag rather than a shared
/// constant compared by identity: a genuinely computed infinite number
/// stays `Finite(Number(inf))` and is never mistaken for a sentinel.
/// Sentinels are only meaningful as initials; after the first `apply`
/// every slot is `Finite`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateValue {
    Finite(Value),
    NegInfinity,
    PosInfinity,
}

impl StateValue {
    pub fn number(n: f64) -> Self {
        StateValue::Finite(Value::Number(n))
    }

    pub fn vector(v: [f64; 3]) -> Self {
        StateValue::Finite(Value::Vector(v))
    }

    /// The value fed into step/result evaluation. Sentinels enter the
    /// arithmetic as IEEE infinities.
    pub fn to_value(self) -> Value {
        match self {
            StateValue::Finite(v) => v,
            StateValue::NegInfinity => Value::Number(f64::NEG_INFINITY),
            StateValue::PosInfinity => Value::Number(f64::INFINITY),
        }
    }
}

impl From<Value> for StateValue {
    fn from(v: Value) -> Self {
        StateValue::Finite(v)
    }
}

impl From<f64> for StateValue {
    fn from(n: f64) -> Self {
        StateValue::number(n)
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Finite(v) => write!(f, "{}", v),
            StateValue::NegInfinity => write!(f, "-inf"),
            StateValue::PosInfinity => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_are_tags_not_computed_infinities() {
        let computed = StateValue::Finite(Value::Number(f64::INFINITY));
        assert_ne!(computed, StateValue::PosInfinity);
        assert_eq!(computed.to_value(), StateValue::PosInfinity.to_value());
    }

    #[test]
    fn sentinels_render_as_inf_tokens() {
        assert_eq!(StateValue::PosInfinity.to_string(), "inf");
        assert_eq!(StateValue::NegInfinity.to_string(), "-inf");
        assert_eq!(StateValue::number(0.0).to_string(), "0");
        assert_eq!(StateValue::vector([0.0, 0.0, 0.0]).to_string(), "(0, 0, 0)");
    }
}
