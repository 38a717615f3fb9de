use std::collections::BTreeMap;

use serde::Serialize;

use crate::schema::Field;

/// Sleep-duration buckets offered by the form. Serialized as the exact
/// option strings the prediction service was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SleepDuration {
    #[serde(rename = "Less than 5 hours")]
    LessThanFiveHours,
    #[serde(rename = "5-6 hours")]
    FiveToSixHours,
    #[serde(rename = "7-8 hours")]
    SevenToEightHours,
    #[serde(rename = "More than 8 hours")]
    MoreThanEightHours,
}

impl SleepDuration {
    pub const VALUES: [SleepDuration; 4] = [
        SleepDuration::LessThanFiveHours,
        SleepDuration::FiveToSixHours,
        SleepDuration::SevenToEightHours,
        SleepDuration::MoreThanEightHours,
    ];

    /// Option strings in form order, used by the schema and the select.
    pub const OPTIONS: &'static [&'static str] = &[
        SleepDuration::LessThanFiveHours.as_str(),
        SleepDuration::FiveToSixHours.as_str(),
        SleepDuration::SevenToEightHours.as_str(),
        SleepDuration::MoreThanEightHours.as_str(),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SleepDuration::LessThanFiveHours => "Less than 5 hours",
            SleepDuration::FiveToSixHours => "5-6 hours",
            SleepDuration::SevenToEightHours => "7-8 hours",
            SleepDuration::MoreThanEightHours => "More than 8 hours",
        }
    }

    pub fn parse(value: &str) -> Option<SleepDuration> {
        Self::VALUES.into_iter().find(|option| option.as_str() == value)
    }
}

/// Dietary-habits answer, one of three coarse buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DietaryHabits {
    Healthy,
    Moderate,
    Unhealthy,
}

impl DietaryHabits {
    pub const VALUES: [DietaryHabits; 3] = [
        DietaryHabits::Healthy,
        DietaryHabits::Moderate,
        DietaryHabits::Unhealthy,
    ];

    pub const OPTIONS: &'static [&'static str] = &[
        DietaryHabits::Healthy.as_str(),
        DietaryHabits::Moderate.as_str(),
        DietaryHabits::Unhealthy.as_str(),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DietaryHabits::Healthy => "Healthy",
            DietaryHabits::Moderate => "Moderate",
            DietaryHabits::Unhealthy => "Unhealthy",
        }
    }

    pub fn parse(value: &str) -> Option<DietaryHabits> {
        Self::VALUES.into_iter().find(|option| option.as_str() == value)
    }
}

/// Answer to the suicidal-thoughts screening question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SuicidalThoughts {
    Yes,
    No,
}

impl SuicidalThoughts {
    pub const VALUES: [SuicidalThoughts; 2] = [SuicidalThoughts::Yes, SuicidalThoughts::No];

    pub const OPTIONS: &'static [&'static str] = &[
        SuicidalThoughts::Yes.as_str(),
        SuicidalThoughts::No.as_str(),
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            SuicidalThoughts::Yes => "Yes",
            SuicidalThoughts::No => "No",
        }
    }

    pub fn parse(value: &str) -> Option<SuicidalThoughts> {
        Self::VALUES.into_iter().find(|option| option.as_str() == value)
    }
}

/// A survey answer set that passed validation: numeric fields coerced,
/// choice fields resolved to their typed values. Produced once per
/// successful submission attempt and handed straight to the wire layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    pub age: u32,
    pub academic_pressure: u32,
    pub study_satisfaction: u32,
    pub work_study_hours: u32,
    pub financial_stress: u32,
    pub sleep_duration: SleepDuration,
    pub dietary_habits: DietaryHabits,
    pub suicidal_thoughts: SuicidalThoughts,
}

/// Raw form values exactly as typed or selected, one string per field.
/// Fields the user has not touched read as the empty string.
#[derive(Debug, Clone, Default)]
pub struct SurveyDraft {
    values: BTreeMap<Field, String>,
}

impl SurveyDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values.insert(field, value);
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_strings_round_trip_through_parse() {
        for value in SleepDuration::VALUES {
            assert_eq!(SleepDuration::parse(value.as_str()), Some(value));
        }
        for value in DietaryHabits::VALUES {
            assert_eq!(DietaryHabits::parse(value.as_str()), Some(value));
        }
        for value in SuicidalThoughts::VALUES {
            assert_eq!(SuicidalThoughts::parse(value.as_str()), Some(value));
        }
    }

    #[test]
    fn parse_is_exact_match_only() {
        assert_eq!(SleepDuration::parse(""), None);
        assert_eq!(SleepDuration::parse("6-8 hours"), None);
        assert_eq!(DietaryHabits::parse("healthy"), None);
        assert_eq!(SuicidalThoughts::parse("yes "), None);
    }

    #[test]
    fn serialization_matches_the_option_strings() {
        assert_eq!(
            serde_json::to_value(SleepDuration::SevenToEightHours).expect("serializes"),
            json!("7-8 hours")
        );
        assert_eq!(
            serde_json::to_value(DietaryHabits::Moderate).expect("serializes"),
            json!("Moderate")
        );
        assert_eq!(
            serde_json::to_value(SuicidalThoughts::No).expect("serializes"),
            json!("No")
        );
    }

    #[test]
    fn option_lists_are_complete() {
        assert_eq!(SleepDuration::OPTIONS.len(), 4);
        assert_eq!(DietaryHabits::OPTIONS.len(), 3);
        assert_eq!(SuicidalThoughts::OPTIONS.len(), 2);
    }

    #[test]
    fn draft_reads_empty_until_set() {
        let mut draft = SurveyDraft::new();
        assert_eq!(draft.value(Field::Age), "");

        draft.set(Field::Age, "25".to_string());
        assert_eq!(draft.value(Field::Age), "25");

        draft.set(Field::Age, String::new());
        assert_eq!(draft.value(Field::Age), "");
    }
}
