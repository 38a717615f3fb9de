use serde::{Deserialize, Serialize};

use crate::model::survey::{DietaryHabits, SleepDuration, SuicidalThoughts, SurveyRecord};

/// Default address of the prediction service.
pub const PREDICT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

#[derive(Debug, Clone, Serialize)]
/// Request payload for the prediction endpoint, keyed the way the service
/// names its survey features.
pub struct PredictRequest {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Academic Pressure")]
    pub academic_pressure: u32,
    #[serde(rename = "Study Satisfaction")]
    pub study_satisfaction: u32,
    #[serde(rename = "Work/Study Hours")]
    pub work_study_hours: u32,
    #[serde(rename = "Financial Stress")]
    pub financial_stress: u32,
    #[serde(rename = "Sleep Duration")]
    pub sleep_duration: SleepDuration,
    #[serde(rename = "Dietary Habits")]
    pub dietary_habits: DietaryHabits,
    #[serde(rename = "Have you ever had suicidal thoughts ?")]
    pub suicidal_thoughts: SuicidalThoughts,
}

impl From<&SurveyRecord> for PredictRequest {
    fn from(record: &SurveyRecord) -> Self {
        Self {
            age: record.age,
            academic_pressure: record.academic_pressure,
            study_satisfaction: record.study_satisfaction,
            work_study_hours: record.work_study_hours,
            financial_stress: record.financial_stress,
            sleep_duration: record.sleep_duration,
            dietary_habits: record.dietary_habits,
            suicidal_thoughts: record.suicidal_thoughts,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
/// Response body of the prediction endpoint: a `prediction` text on
/// success, or the service's own `error` description.
pub struct PredictResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> SurveyRecord {
        SurveyRecord {
            age: 25,
            academic_pressure: 3,
            study_satisfaction: 4,
            work_study_hours: 8,
            financial_stress: 2,
            sleep_duration: SleepDuration::SevenToEightHours,
            dietary_habits: DietaryHabits::Moderate,
            suicidal_thoughts: SuicidalThoughts::No,
        }
    }

    #[test]
    fn payload_uses_the_service_vocabulary() {
        let payload = serde_json::to_value(PredictRequest::from(&record())).expect("serializes");

        assert_eq!(
            payload,
            json!({
                "Age": 25,
                "Academic Pressure": 3,
                "Study Satisfaction": 4,
                "Work/Study Hours": 8,
                "Financial Stress": 2,
                "Sleep Duration": "7-8 hours",
                "Dietary Habits": "Moderate",
                "Have you ever had suicidal thoughts ?": "No",
            })
        );
    }

    #[test]
    fn payload_has_exactly_eight_keys() {
        let payload = serde_json::to_value(PredictRequest::from(&record())).expect("serializes");
        let object = payload.as_object().expect("payload is an object");
        assert_eq!(object.len(), 8);
    }

    #[test]
    fn response_decodes_from_either_shape() {
        let ok: PredictResponse =
            serde_json::from_value(json!({ "prediction": "You have 42.50% chances" }))
                .expect("decodes");
        assert_eq!(ok.prediction.as_deref(), Some("You have 42.50% chances"));
        assert_eq!(ok.error, None);

        let failed: PredictResponse =
            serde_json::from_value(json!({ "error": "model unavailable" })).expect("decodes");
        assert_eq!(failed.prediction, None);
        assert_eq!(failed.error.as_deref(), Some("model unavailable"));
    }

    #[test]
    fn response_tolerates_empty_and_unknown_fields() {
        let empty: PredictResponse = serde_json::from_value(json!({})).expect("decodes");
        assert_eq!(empty.prediction, None);
        assert_eq!(empty.error, None);

        let extra: PredictResponse =
            serde_json::from_value(json!({ "prediction": "ok 1.0", "model": "v2" }))
                .expect("unknown fields are ignored");
        assert_eq!(extra.prediction.as_deref(), Some("ok 1.0"));
    }
}
