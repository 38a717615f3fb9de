//! Component state for the survey form.
//!
//! This module defines the state struct that holds the form's runtime data
//! (the draft answers, validation messages, and the result of the last
//! submission) together with its initial-state constructor.

use common::model::survey::SurveyDraft;
use common::recommend::RecommendationBundle;
use common::validate::ValidationErrors;

use super::styles::Theme;

/// Main state container for the `SurveyFormComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct SurveyFormComponent {
    /// Raw field values exactly as present in the form controls.
    pub draft: SurveyDraft,

    /// Field-scoped messages from the last submission attempt. Empty while
    /// no attempt has failed validation.
    pub errors: ValidationErrors,

    /// Text for the result panel: the service's prediction text, or the
    /// generic failure text. `None` until the first submission resolves.
    pub prediction: Option<String>,

    /// Advice bundle for the last successful prediction. Cleared whenever
    /// a submission fails.
    pub recommendation: Option<&'static RecommendationBundle>,

    /// Current display theme, toggled from the card header.
    pub theme: Theme,

    /// True while a prediction request is outstanding; the submit control
    /// stays disabled for the duration.
    pub submitting: bool,
}

impl SurveyFormComponent {
    /// Constructs the initial state: an empty draft, no errors, no result
    /// panels, light theme, nothing in flight.
    pub fn new() -> Self {
        Self {
            draft: SurveyDraft::new(),
            errors: ValidationErrors::new(),
            prediction: None,
            recommendation: None,
            theme: Theme::Light,
            submitting: false,
        }
    }
}
