//! Submission-time validation of the survey draft.
//!
//! Every check is field-independent and driven by the schema table: the
//! range, the option list, and the name used in derived messages all come
//! from `schema::FIELDS`. A single pass either yields the fully typed
//! `SurveyRecord` or the field-scoped messages for inline display.

use std::collections::BTreeMap;

use crate::model::survey::{
    DietaryHabits, SleepDuration, SuicidalThoughts, SurveyDraft, SurveyRecord,
};
use crate::schema::{self, Field, FieldKind, FieldSpec};

/// Field-scoped validation failures, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<Field, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: String) {
        self.entries.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Checks every field of `draft` against the schema. All eight fields must
/// pass independently; any failure blocks the record and reports one
/// message per offending field.
pub fn validate(draft: &SurveyDraft) -> Result<SurveyRecord, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let age = number_field(draft, Field::Age, &mut errors);
    let academic_pressure = number_field(draft, Field::AcademicPressure, &mut errors);
    let study_satisfaction = number_field(draft, Field::StudySatisfaction, &mut errors);
    let work_study_hours = number_field(draft, Field::WorkStudyHours, &mut errors);
    let financial_stress = number_field(draft, Field::FinancialStress, &mut errors);
    let sleep_duration = choice_field(draft, Field::SleepDuration, SleepDuration::parse, &mut errors);
    let dietary_habits = choice_field(draft, Field::DietaryHabits, DietaryHabits::parse, &mut errors);
    let suicidal_thoughts =
        choice_field(draft, Field::SuicidalThoughts, SuicidalThoughts::parse, &mut errors);

    match (
        age,
        academic_pressure,
        study_satisfaction,
        work_study_hours,
        financial_stress,
        sleep_duration,
        dietary_habits,
        suicidal_thoughts,
    ) {
        (
            Some(age),
            Some(academic_pressure),
            Some(study_satisfaction),
            Some(work_study_hours),
            Some(financial_stress),
            Some(sleep_duration),
            Some(dietary_habits),
            Some(suicidal_thoughts),
        ) => Ok(SurveyRecord {
            age,
            academic_pressure,
            study_satisfaction,
            work_study_hours,
            financial_stress,
            sleep_duration,
            dietary_habits,
            suicidal_thoughts,
        }),
        _ => Err(errors),
    }
}

/// Validates one numeric field against its schema range. Returns the value
/// when it passes; otherwise records the message and returns `None`.
fn number_field(draft: &SurveyDraft, field: Field, errors: &mut ValidationErrors) -> Option<u32> {
    let spec = schema::spec(field);
    let FieldKind::Number { min, max } = spec.kind else {
        errors.insert(field, format!("{} is not a numeric field", spec.name));
        return None;
    };

    let raw = draft.value(field).trim();
    if raw.is_empty() {
        errors.insert(field, required_message(field));
        return None;
    }

    let value: i64 = match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            errors.insert(field, format!("{} must be a whole number", spec.name));
            return None;
        }
    };

    if value < min {
        errors.insert(field, below_minimum_message(spec, min));
        return None;
    }
    if value > max {
        errors.insert(field, above_maximum_message(spec, max));
        return None;
    }

    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            errors.insert(field, format!("{} is out of range", spec.name));
            None
        }
    }
}

/// Validates one choice field: present and a member of the option list,
/// with membership decided by the enum's own parser.
fn choice_field<T>(
    draft: &SurveyDraft,
    field: Field,
    parse: fn(&str) -> Option<T>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let raw = draft.value(field).trim();
    if raw.is_empty() {
        errors.insert(field, required_message(field));
        return None;
    }

    match parse(raw) {
        Some(value) => Some(value),
        None => {
            errors.insert(field, "Select a valid option".to_string());
            None
        }
    }
}

fn required_message(field: Field) -> String {
    match field {
        Field::Age => "Age is required".to_string(),
        _ => "Required".to_string(),
    }
}

fn below_minimum_message(spec: &FieldSpec, min: i64) -> String {
    match spec.field {
        Field::Age => format!("Minimum age is {}", min),
        _ => format!("{} must be at least {}", spec.name, min),
    }
}

fn above_maximum_message(spec: &FieldSpec, max: i64) -> String {
    match spec.field {
        Field::Age => format!("Maximum age is {}", max),
        _ => format!("{} must be at most {}", spec.name, max),
    }
}
