//! Math solver payloads

use serde::{Deserialize, Serialize};

/// Worked solution for `POST /math/solve`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MathSolution {
    #[serde(default)]
    pub problem: Option<String>,
    pub answer: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}
