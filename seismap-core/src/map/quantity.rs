use serde::{Deserialize, Serialize};

/// a numeric map parameter that keeps the number type it was configured with,
/// so `24` reaches the renderer as an integer and `0.5` as a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Integer(i64),
    Float(f64),
}

impl Quantity {
    pub fn value(&self) -> f64 {
        match self {
            Quantity::Integer(value) => *value as f64,
            Quantity::Float(value) => *value,
        }
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Quantity::Integer(value)
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Float(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Integer(value) => write!(f, "{value}"),
            Quantity::Float(value) => write!(f, "{value}"),
        }
    }
}
