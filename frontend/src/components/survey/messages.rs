#[derive(Clone)]
pub enum Msg {
    FieldChanged(common::schema::Field, String),
    ToggleTheme,
    Submit,
    PredictionReady {
        text: String,
        bundle: &'static common::recommend::RecommendationBundle,
    },
    PredictionFailed,
}
