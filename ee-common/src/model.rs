//! Recruitment risk classifier
//!
//! The dashboard treats the classifier as an opaque probability source behind
//! [`RiskModel`]. The bundled implementation is a two-feature logistic
//! regression whose weights are exported to JSON:
//!
//! ```json
//! { "coefficients": [-0.08, 0.21], "intercept": -1.3 }
//! ```
//!
//! Coefficient order matches [`ModelFeatures`]: positive events, then negative events.

use crate::db::ModelFeatures;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Probability source for the recruitment risk chart
pub trait RiskModel: Send + Sync {
    /// One `[p(class 0), p(class 1)]` pair per input row
    fn predict_proba(&self, features: &[ModelFeatures]) -> Vec<[f64; 2]>;
}

/// Binary logistic regression over summed event counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: [f64; 2],
    pub intercept: f64,
}

impl LogisticModel {
    pub fn new(coefficients: [f64; 2], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Load weights from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
            .map_err(|e| Error::Model(format!("{}: {}", path.display(), e)))
    }

    /// Parse weights from JSON text, rejecting non-finite values
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self =
            serde_json::from_str(json).map_err(|e| Error::Model(e.to_string()))?;

        if !model.intercept.is_finite() || model.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(Error::Model("weights must be finite numbers".to_string()));
        }

        Ok(model)
    }

    fn positive_probability(&self, row: &ModelFeatures) -> f64 {
        let z = self.intercept
            + self.coefficients[0] * row.positive_events
            + self.coefficients[1] * row.negative_events;
        1.0 / (1.0 + (-z).exp())
    }
}

impl RiskModel for LogisticModel {
    fn predict_proba(&self, features: &[ModelFeatures]) -> Vec<[f64; 2]> {
        features
            .iter()
            .map(|row| {
                let p1 = self.positive_probability(row);
                [1.0 - p1, p1]
            })
            .collect()
    }
}

/// Mean class-1 probability across all feature rows
///
/// Averages column 1 of `predict_proba` (the positive class), not column 0.
///
/// Returns `None` when there is nothing to score.
pub fn recruitment_risk(model: &dyn RiskModel, features: &[ModelFeatures]) -> Option<f64> {
    if features.is_empty() {
        return None;
    }

    let probabilities = model.predict_proba(features);
    if probabilities.is_empty() {
        return None;
    }

    let total: f64 = probabilities.iter().map(|p| p[1]).sum();
    Some(total / probabilities.len() as f64)
}
