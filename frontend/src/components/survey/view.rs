//! View rendering for the survey form component.
//!
//! One centered card: theme toggle, title, the schema-driven field grid
//! (first schema half on the left, second on the right), the submit
//! control, and the result/recommendation panels that appear once a
//! submission has resolved. Labels, placeholders, option lists, and field
//! order all come from the schema table; nothing here names a field
//! directly.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::schema::{Field, FieldKind, FieldSpec, FIELDS};

use super::messages::Msg;
use super::state::SurveyFormComponent;
use super::styles;
use crate::form_grid::FormGrid;

/// Main view function: the full page with the survey card.
pub fn view(component: &SurveyFormComponent, ctx: &Context<SurveyFormComponent>) -> Html {
    let link = ctx.link();
    let theme = component.theme;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class={styles::page(theme)}>
            <form class={styles::card(theme)} {onsubmit}>
                { build_theme_toggle(component, link) }
                <h2 class={styles::title(theme)}>
                    { "NeuroWell: AI-Driven Mental Health Analysis" }
                </h2>
                <FormGrid columns={2}>
                    { build_column(component, link, &FIELDS[..4]) }
                    { build_column(component, link, &FIELDS[4..]) }
                </FormGrid>
                { build_submit_button(component) }
                { build_result_panel(component) }
                { build_recommendation_panel(component) }
            </form>
        </div>
    }
}

fn build_theme_toggle(component: &SurveyFormComponent, link: &Scope<SurveyFormComponent>) -> Html {
    html! {
        <div class={styles::TOGGLE_ROW}>
            <button
                type="button"
                class={styles::toggle_button(component.theme)}
                onclick={link.callback(|_| Msg::ToggleTheme)}
            >
                { component.theme.icon() }
            </button>
        </div>
    }
}

/// Renders one column of the field grid in schema order.
fn build_column(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
    specs: &[FieldSpec],
) -> Html {
    html! {
        <div class={styles::COLUMN}>
            { for specs.iter().map(|spec| build_field(component, link, spec)) }
        </div>
    }
}

/// Renders a labeled control with its inline error, driven entirely by the
/// field's schema entry.
fn build_field(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
    spec: &FieldSpec,
) -> Html {
    let control = match spec.kind {
        FieldKind::Number { .. } => build_number_input(component, link, spec),
        FieldKind::Choice { options } => build_select(component, link, spec, options),
    };

    html! {
        <div>
            <label class={styles::label(component.theme)}>{ spec.label }</label>
            { control }
            { build_field_error(component, spec.field) }
        </div>
    }
}

fn build_number_input(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
    spec: &FieldSpec,
) -> Html {
    html! {
        <input
            type="number"
            class={styles::control(component.theme)}
            value={component.draft.value(spec.field).to_string()}
            placeholder={spec.placeholder}
            oninput={make_input_callback(link, spec.field)}
        />
    }
}

fn build_select(
    component: &SurveyFormComponent,
    link: &Scope<SurveyFormComponent>,
    spec: &FieldSpec,
    options: &'static [&'static str],
) -> Html {
    let current = component.draft.value(spec.field);

    html! {
        <select class={styles::control(component.theme)} onchange={make_select_callback(link, spec.field)}>
            <option value="" disabled={true} selected={current.is_empty()}>
                { spec.placeholder }
            </option>
            {
                for options.iter().map(|option| html! {
                    <option value={*option} selected={current == *option}>{ *option }</option>
                })
            }
        </select>
    }
}

fn build_field_error(component: &SurveyFormComponent, field: Field) -> Html {
    match component.errors.get(field) {
        Some(message) => html! {
            <p class={styles::ERROR_TEXT}>{ message }</p>
        },
        None => html! {},
    }
}

fn build_submit_button(component: &SurveyFormComponent) -> Html {
    html! {
        <button
            type="submit"
            class={styles::submit_button(component.theme)}
            disabled={component.submitting}
        >
            { "Predict" }
        </button>
    }
}

fn build_result_panel(component: &SurveyFormComponent) -> Html {
    let theme = component.theme;
    match &component.prediction {
        Some(text) => html! {
            <div class={styles::result_panel(theme)}>
                <p class={styles::panel_heading(theme)}>
                    { "Prediction: " }
                    <span class={styles::result_value(theme)}>{ text }</span>
                </p>
            </div>
        },
        None => html! {},
    }
}

fn build_recommendation_panel(component: &SurveyFormComponent) -> Html {
    let theme = component.theme;
    match component.recommendation {
        Some(bundle) => html! {
            <div class={styles::recommendation_panel(theme)}>
                <p class={styles::panel_heading(theme)}>{ "Recommendations:" }</p>
                <p class={styles::panel_body(theme)}>{ bundle.message }</p>
                <ul class={styles::RESOURCE_LIST}>
                    { for bundle.resources.iter().map(|resource| html! {
                        <li class={styles::panel_text(theme)}>{ *resource }</li>
                    }) }
                </ul>
            </div>
        },
        None => html! {},
    }
}

/// Creates an input callback that stores the field's raw text on each edit.
fn make_input_callback(link: &Scope<SurveyFormComponent>, field: Field) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let value = e.target_unchecked_into::<HtmlInputElement>().value();
        Msg::FieldChanged(field, value)
    })
}

/// Creates a change callback for a select control; events whose target is
/// not a select element are dropped.
fn make_select_callback(link: &Scope<SurveyFormComponent>, field: Field) -> Callback<Event> {
    link.batch_callback(move |e: Event| {
        e.target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            .map(|select| Msg::FieldChanged(field, select.value()))
    })
}
