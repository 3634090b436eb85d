//! Adapter around the pre-trained binary classifier.
//!
//! The model itself is trained elsewhere; this side only loads its exported
//! parameters, guarantees the feature-vector shape, and maps its output onto
//! a verdict. Class labels follow the training data: `1` is phishing, `-1`
//! is legitimate, anything else reads as uncertain rather than an error.

use crate::features::{FEATURE_COUNT, FeatureVector};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const PHISHING_CLASS: i32 = 1;
pub const LEGITIMATE_CLASS: i32 = -1;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("failed to read model file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("model has {got} weights, feature schema has {expected}")]
    WeightCount { expected: usize, got: usize },
}

/// Exported parameters of the trained logistic-regression model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelParams {
    /// Class labels in trained order; `probabilities` aligns to this order.
    pub classes: [i32; 2],
    pub weights: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug)]
pub struct LogisticModel {
    params: ModelParams,
}

impl LogisticModel {
    pub fn from_params(params: ModelParams) -> Result<Self, ModelError> {
        if params.weights.len() != FEATURE_COUNT {
            return Err(ModelError::WeightCount {
                expected: FEATURE_COUNT,
                got: params.weights.len(),
            });
        }
        Ok(Self { params })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let params: ModelParams = serde_json::from_str(&raw)?;
        Self::from_params(params)
    }

    pub fn feature_count(&self) -> usize {
        FEATURE_COUNT
    }

    /// Score one feature vector. Probability of the second trained class
    /// comes from the logistic link over the dot product; the discrete
    /// class is whichever side of 0.5 that lands on.
    pub fn predict(&self, features: &FeatureVector) -> Prediction {
        let z: f64 = self.params.intercept
            + features
                .to_f64()
                .iter()
                .zip(&self.params.weights)
                .map(|(x, w)| x * w)
                .sum::<f64>();
        let p_second = 1.0 / (1.0 + (-z).exp());

        let class = if p_second >= 0.5 {
            self.params.classes[1]
        } else {
            self.params.classes[0]
        };

        Prediction {
            class,
            probabilities: [1.0 - p_second, p_second],
        }
    }
}

/// Discrete class plus the two-class probability distribution, aligned to
/// the model's trained class order.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class: i32,
    pub probabilities: [f64; 2],
}

/// Human-facing outcome. Confidence is a percentage of the winning class.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Phishing { confidence: f64 },
    Legitimate { confidence: f64 },
    Uncertain,
}

impl Verdict {
    /// Trained class order is `[legitimate, phishing]`, so probability
    /// indices are fixed here the same way they were at training time.
    pub fn from_prediction(prediction: &Prediction) -> Self {
        match prediction.class {
            PHISHING_CLASS => Self::Phishing {
                confidence: prediction.probabilities[1] * 100.0,
            },
            LEGITIMATE_CLASS => Self::Legitimate {
                confidence: prediction.probabilities[0] * 100.0,
            },
            _ => Self::Uncertain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params(weights: Vec<f64>, intercept: f64) -> ModelParams {
        ModelParams {
            classes: [LEGITIMATE_CLASS, PHISHING_CLASS],
            weights,
            intercept,
        }
    }

    fn uniform_model(weight: f64, intercept: f64) -> LogisticModel {
        LogisticModel::from_params(test_params(vec![weight; FEATURE_COUNT], intercept)).unwrap()
    }

    #[test]
    fn rejects_wrong_weight_count() {
        let err = LogisticModel::from_params(test_params(vec![0.0; 5], 0.0)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::WeightCount {
                expected: FEATURE_COUNT,
                got: 5
            }
        ));
    }

    #[test]
    fn probabilities_sum_to_one() {
        let model = uniform_model(-0.2, 0.3);
        let vector = FeatureVector::from([1; FEATURE_COUNT]);
        let prediction = model.predict(&vector);
        let sum: f64 = prediction.probabilities.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn suspicious_vector_lands_on_phishing_class() {
        // negative weights: -1 feature values push z positive
        let model = uniform_model(-0.5, 0.0);
        let prediction = model.predict(&FeatureVector::from([-1; FEATURE_COUNT]));
        assert_eq!(prediction.class, PHISHING_CLASS);
        assert!(prediction.probabilities[1] > 0.5);
        assert!(matches!(
            Verdict::from_prediction(&prediction),
            Verdict::Phishing { confidence } if confidence > 50.0
        ));
    }

    #[test]
    fn safe_vector_lands_on_legitimate_class() {
        let model = uniform_model(-0.5, 0.0);
        let prediction = model.predict(&FeatureVector::from([1; FEATURE_COUNT]));
        assert_eq!(prediction.class, LEGITIMATE_CLASS);
        assert!(matches!(
            Verdict::from_prediction(&prediction),
            Verdict::Legitimate { confidence } if confidence > 50.0
        ));
    }

    #[test]
    fn unrecognized_class_is_uncertain_not_an_error() {
        let params = ModelParams {
            classes: [0, 2],
            weights: vec![0.0; FEATURE_COUNT],
            intercept: 1.0,
        };
        let model = LogisticModel::from_params(params).unwrap();
        let prediction = model.predict(&FeatureVector::from([1; FEATURE_COUNT]));
        assert_eq!(Verdict::from_prediction(&prediction), Verdict::Uncertain);
    }

    #[test]
    fn bundled_model_file_loads() {
        let model = LogisticModel::from_file("model/model.json").unwrap();
        assert_eq!(model.feature_count(), FEATURE_COUNT);
    }
}
