//! Defines the properties for the `SurveyFormComponent`.
//!
//! This module contains the `SurveyFormProps` struct, which specifies the data that can be
//! passed from a parent component to the survey form. These properties are used to address
//! the prediction service the form submits to.

use common::requests::PREDICT_ENDPOINT;
use yew::prelude::*;

/// Properties for the `SurveyFormComponent`.
///
/// This struct is used by Yew to pass configuration data to the form. It allows parent
/// components to control where validated submissions are sent.
#[derive(Properties, PartialEq, Clone)]
pub struct SurveyFormProps {
    /// The address of the prediction service that receives the survey payload.
    ///
    /// - If provided, each validated submission is POSTed to this URL.
    ///
    /// - If omitted (the default), the compiled-in development address
    ///   `http://127.0.0.1:5000/predict` is used.
    ///
    /// The property is read on every submission, so a parent may change the endpoint
    /// between submissions without remounting the form.
    #[prop_or(AttrValue::Static(PREDICT_ENDPOINT))]
    pub endpoint: AttrValue,
}
