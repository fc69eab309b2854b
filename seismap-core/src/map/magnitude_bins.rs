use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::SeismapError;

/// edges of the magnitude bins used to group catalog events. each pair of
/// consecutive edges forms one bin, so n edges describe n - 1 bins.
///
/// construction enforces that edges are finite and strictly ascending, so
/// an instance always describes at least one well-formed bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct MagnitudeBins(Vec<f64>);

impl MagnitudeBins {
    pub fn new(edges: Vec<f64>) -> Result<MagnitudeBins, SeismapError> {
        if edges.len() < 2 {
            return Err(SeismapError::InvalidMagnitudeBins(format!(
                "at least two bin edges are required, found {}",
                edges.len()
            )));
        }
        if let Some(bad) = edges.iter().find(|e| !e.is_finite()) {
            return Err(SeismapError::InvalidMagnitudeBins(format!(
                "bin edge '{bad}' is not a finite number"
            )));
        }
        for (idx, (lo, hi)) in edges.iter().tuple_windows().enumerate() {
            if !(lo < hi) {
                return Err(SeismapError::InvalidMagnitudeBins(format!(
                    "edges must be strictly ascending, but edge {} ({lo}) is not less than edge {} ({hi})",
                    idx,
                    idx + 1
                )));
            }
        }
        Ok(MagnitudeBins(edges))
    }

    pub fn edges(&self) -> &[f64] {
        &self.0
    }

    /// lowest bin edge
    pub fn lower(&self) -> f64 {
        self.0[0]
    }

    /// highest bin edge
    pub fn upper(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn bin_count(&self) -> usize {
        self.0.len() - 1
    }

    /// the labels a renderer derives for each bin, in ascending order,
    /// such as `3.5-4.5`.
    pub fn labels(&self) -> Vec<String> {
        self.0
            .iter()
            .tuple_windows()
            .map(|(lo, hi)| bin_label(*lo, *hi))
            .collect_vec()
    }
}

/// formats one bin as `{lower}-{upper}` with one decimal place
pub fn bin_label(lower: f64, upper: f64) -> String {
    format!("{lower:.1}-{upper:.1}")
}

impl TryFrom<Vec<f64>> for MagnitudeBins {
    type Error = SeismapError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        MagnitudeBins::new(value)
    }
}

impl From<MagnitudeBins> for Vec<f64> {
    fn from(value: MagnitudeBins) -> Self {
        value.0
    }
}

impl std::fmt::Display for MagnitudeBins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}
