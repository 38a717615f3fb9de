//! Survey form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and styling.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `SurveyFormProps`, `SurveyFormComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod styles;
mod update;
mod view;

pub use messages::Msg;
pub use props::SurveyFormProps;
pub use state::SurveyFormComponent;

impl Component for SurveyFormComponent {
    type Message = Msg;
    type Properties = SurveyFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SurveyFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
