//! Interpretation of the prediction service's response.
//!
//! The service answers with free text, not a structured number; the chance
//! driving the recommendation engine is the first decimal substring of that
//! text. A response without one is a failure, never a zero-percent chance.

use regex::Regex;
use thiserror::Error;

use crate::requests::PredictResponse;

/// Text shown in the result panel whenever a submission fails, whatever
/// the failure class.
pub const FAILURE_TEXT: &str = "Error making prediction";

/// Ways a well-formed HTTP response can still fail to yield a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    #[error("prediction service reported an error: {0}")]
    Service(String),
    #[error("response did not contain a prediction")]
    MissingPrediction,
    #[error("prediction text did not contain a percentage")]
    MissingChance,
}

/// A usable prediction: the service's display text plus the depression
/// chance extracted from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub text: String,
    pub chance: f64,
}

impl Prediction {
    /// Resolves a decoded response body into a prediction. The `prediction`
    /// field wins when present; a bare `error` field surfaces the service's
    /// own failure description.
    pub fn from_response(response: PredictResponse) -> Result<Prediction, PredictionError> {
        match (response.prediction, response.error) {
            (Some(text), _) => {
                let chance = extract_chance(&text).ok_or(PredictionError::MissingChance)?;
                Ok(Prediction { text, chance })
            }
            (None, Some(error)) => Err(PredictionError::Service(error)),
            (None, None) => Err(PredictionError::MissingPrediction),
        }
    }
}

/// First decimal substring of `text` (digits, a point, digits) as a number.
pub fn extract_chance(text: &str) -> Option<f64> {
    let re = Regex::new(r"\d+\.\d+").unwrap();
    re.find(text).and_then(|capture| capture.as_str().parse().ok())
}
