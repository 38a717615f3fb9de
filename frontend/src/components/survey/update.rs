//! Update function for the survey form component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `SurveyFormComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Field edits only store the raw string; constraints are checked on
//!   submit, never per keystroke.
//! - `Submit` runs the validator. A clean draft is re-keyed into the
//!   service vocabulary and POSTed to the prediction endpoint, with the
//!   submit control disabled until the response lands. A dirty draft
//!   replaces the inline messages and makes no network call.
//! - A resolved response carries either the prediction text plus its
//!   recommendation bundle, or the generic failure text with the
//!   recommendations cleared. Failure detail goes to the console only.

use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::prediction::{Prediction, FAILURE_TEXT};
use common::recommend::recommend;
use common::requests::{PredictRequest, PredictResponse};
use common::validate::{validate, ValidationErrors};

use super::messages::Msg;
use super::state::SurveyFormComponent;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (async callbacks).
/// - Returns `true` to re-render the view.
pub fn update(
    component: &mut SurveyFormComponent,
    ctx: &Context<SurveyFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::FieldChanged(field, value) => {
            component.draft.set(field, value);
            true
        }
        Msg::ToggleTheme => {
            component.theme = component.theme.toggled();
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }

            match validate(&component.draft) {
                Ok(record) => {
                    component.errors = ValidationErrors::new();
                    component.submitting = true;

                    let payload = PredictRequest::from(&record);
                    log!(
                        "Submitting survey:",
                        serde_json::to_string(&payload).unwrap_or_default()
                    );

                    let endpoint = ctx.props().endpoint.to_string();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        match Request::post(&endpoint).json(&payload).unwrap().send().await {
                            Ok(response) if response.status() == 200 => {
                                match response.json::<PredictResponse>().await {
                                    Ok(body) => match Prediction::from_response(body) {
                                        Ok(prediction) => {
                                            log!("Prediction received:", prediction.text.clone());
                                            let bundle = recommend(prediction.chance);
                                            link.send_message(Msg::PredictionReady {
                                                text: prediction.text,
                                                bundle,
                                            });
                                        }
                                        Err(err) => {
                                            error!("Prediction unusable:", err.to_string());
                                            link.send_message(Msg::PredictionFailed);
                                        }
                                    },
                                    Err(err) => {
                                        error!(
                                            "Error decoding prediction response:",
                                            err.to_string()
                                        );
                                        link.send_message(Msg::PredictionFailed);
                                    }
                                }
                            }
                            Ok(response) => {
                                error!(
                                    "Prediction request failed:",
                                    response.status(),
                                    response.text().await.unwrap_or_default()
                                );
                                link.send_message(Msg::PredictionFailed);
                            }
                            Err(err) => {
                                error!("Error reaching prediction service:", err.to_string());
                                link.send_message(Msg::PredictionFailed);
                            }
                        }
                    });

                    true
                }
                Err(errors) => {
                    component.errors = errors;
                    true
                }
            }
        }
        Msg::PredictionReady { text, bundle } => {
            component.submitting = false;
            component.prediction = Some(text);
            component.recommendation = Some(bundle);
            true
        }
        Msg::PredictionFailed => {
            component.submitting = false;
            component.prediction = Some(FAILURE_TEXT.to_string());
            component.recommendation = None;
            true
        }
    }
}
