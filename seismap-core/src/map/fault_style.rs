use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// display record for one fault type, as shown in the map legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultTypeStyle {
    pub label: String,
    pub color: String,
}

impl FaultTypeStyle {
    pub fn new(label: &str, color: &str) -> FaultTypeStyle {
        FaultTypeStyle {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// fault type code (such as `N`, `R` or `SS`) to its display record
pub type FaultStyleTable = IndexMap<String, FaultTypeStyle>;
