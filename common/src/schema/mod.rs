//! Declarative survey schema: one table carries every field's constraints,
//! display texts, and position, and both the validator and the form render
//! from it.

use crate::model::survey::{DietaryHabits, SleepDuration, SuicidalThoughts};

/// The eight survey fields, declared in visual form order: the first four
/// fill the left column, the rest the right column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Age,
    AcademicPressure,
    StudySatisfaction,
    WorkStudyHours,
    FinancialStress,
    SleepDuration,
    DietaryHabits,
    SuicidalThoughts,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Age,
        Field::AcademicPressure,
        Field::StudySatisfaction,
        Field::WorkStudyHours,
        Field::FinancialStress,
        Field::SleepDuration,
        Field::DietaryHabits,
        Field::SuicidalThoughts,
    ];
}

/// Constraint class of a field: an inclusive integer range, or a closed
/// list of selectable options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Number { min: i64, max: i64 },
    Choice { options: &'static [&'static str] },
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    /// Short human name, used in derived error messages.
    pub name: &'static str,
    /// Label rendered above the control.
    pub label: &'static str,
    /// Input placeholder, or the disabled first row of a select.
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

/// The survey schema. Ordered by `Field` declaration, so the discriminant
/// doubles as the table index.
pub static FIELDS: [FieldSpec; 8] = [
    FieldSpec {
        field: Field::Age,
        name: "Age",
        label: "Age",
        placeholder: "Enter your age (e.g., 25)",
        kind: FieldKind::Number { min: 17, max: 50 },
    },
    FieldSpec {
        field: Field::AcademicPressure,
        name: "Academic Pressure",
        label: "Academic Pressure (0-5)",
        placeholder: "Rate from 0 to 5",
        kind: FieldKind::Number { min: 0, max: 5 },
    },
    FieldSpec {
        field: Field::StudySatisfaction,
        name: "Study Satisfaction",
        label: "Study Satisfaction (0-5)",
        placeholder: "Rate from 0 to 5",
        kind: FieldKind::Number { min: 0, max: 5 },
    },
    FieldSpec {
        field: Field::WorkStudyHours,
        name: "Work/Study Hours",
        label: "Work/Study Hours",
        placeholder: "Enter hours (e.g., 8)",
        kind: FieldKind::Number { min: 0, max: 12 },
    },
    FieldSpec {
        field: Field::FinancialStress,
        name: "Financial Stress",
        label: "Financial Stress (0-5)",
        placeholder: "Rate from 0 to 5",
        kind: FieldKind::Number { min: 0, max: 5 },
    },
    FieldSpec {
        field: Field::SleepDuration,
        name: "Sleep Duration",
        label: "Sleep Duration",
        placeholder: "Select sleep duration",
        kind: FieldKind::Choice { options: SleepDuration::OPTIONS },
    },
    FieldSpec {
        field: Field::DietaryHabits,
        name: "Dietary Habits",
        label: "Dietary Habits",
        placeholder: "Select dietary habits",
        kind: FieldKind::Choice { options: DietaryHabits::OPTIONS },
    },
    FieldSpec {
        field: Field::SuicidalThoughts,
        name: "Suicidal Thoughts",
        label: "Suicidal Thoughts",
        placeholder: "Select an option",
        kind: FieldKind::Choice { options: SuicidalThoughts::OPTIONS },
    },
];

/// Schema entry for `field`.
pub fn spec(field: Field) -> &'static FieldSpec {
    &FIELDS[field as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for field in Field::ALL {
            assert_eq!(spec(field).field, field);
        }
    }

    #[test]
    fn table_covers_every_field_exactly_once() {
        assert_eq!(FIELDS.len(), Field::ALL.len());
        for field in Field::ALL {
            let hits = FIELDS.iter().filter(|spec| spec.field == field).count();
            assert_eq!(hits, 1, "{:?} must appear once in the table", field);
        }
    }

    #[test]
    fn numeric_ranges_match_the_survey_contract() {
        assert_eq!(spec(Field::Age).kind, FieldKind::Number { min: 17, max: 50 });
        assert_eq!(
            spec(Field::AcademicPressure).kind,
            FieldKind::Number { min: 0, max: 5 }
        );
        assert_eq!(
            spec(Field::StudySatisfaction).kind,
            FieldKind::Number { min: 0, max: 5 }
        );
        assert_eq!(
            spec(Field::WorkStudyHours).kind,
            FieldKind::Number { min: 0, max: 12 }
        );
        assert_eq!(
            spec(Field::FinancialStress).kind,
            FieldKind::Number { min: 0, max: 5 }
        );
    }

    #[test]
    fn choice_fields_expose_their_enum_options() {
        assert_eq!(
            spec(Field::SleepDuration).kind,
            FieldKind::Choice { options: SleepDuration::OPTIONS }
        );
        assert_eq!(
            spec(Field::DietaryHabits).kind,
            FieldKind::Choice { options: DietaryHabits::OPTIONS }
        );
        assert_eq!(
            spec(Field::SuicidalThoughts).kind,
            FieldKind::Choice { options: SuicidalThoughts::OPTIONS }
        );
    }

    #[test]
    fn every_choice_option_parses_into_its_enum() {
        for spec in FIELDS.iter() {
            if let FieldKind::Choice { options } = spec.kind {
                for option in options {
                    let parsed = match spec.field {
                        Field::SleepDuration => SleepDuration::parse(option).is_some(),
                        Field::DietaryHabits => DietaryHabits::parse(option).is_some(),
                        Field::SuicidalThoughts => SuicidalThoughts::parse(option).is_some(),
                        _ => false,
                    };
                    assert!(parsed, "{:?} option {:?} must parse", spec.field, option);
                }
            }
        }
    }

    #[test]
    fn column_split_keeps_form_order() {
        let left: Vec<Field> = FIELDS[..4].iter().map(|spec| spec.field).collect();
        let right: Vec<Field> = FIELDS[4..].iter().map(|spec| spec.field).collect();

        assert_eq!(
            left,
            vec![
                Field::Age,
                Field::AcademicPressure,
                Field::StudySatisfaction,
                Field::WorkStudyHours,
            ]
        );
        assert_eq!(
            right,
            vec![
                Field::FinancialStress,
                Field::SleepDuration,
                Field::DietaryHabits,
                Field::SuicidalThoughts,
            ]
        );
    }
}
