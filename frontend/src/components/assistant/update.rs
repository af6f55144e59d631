//! Update function for the text-to-SQL assistant component.
//!
//! This module contains a single `update` function following an Elm-style
//! architecture: it receives the current `SqlAssistantComponent` state, the
//! `Context`, and a `Msg`, mutates the state accordingly, and returns a
//! `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Empty questions are refused with an error toast before any request is
//!   dispatched.
//! - Every request runs through an operation slot: `begin` hands out a
//!   token, the response comes back as a `*Settled` message carrying that
//!   token, and `settle` drops it when a newer invocation has taken over.
//! - A 2xx ask body that carries its own `error` field settles the slot as
//!   completed but is surfaced as a warning toast; the result table is not
//!   rendered for it.
//! - Transport and server failures become toast messages (ask) or inline
//!   panel text (schema, evaluation); nothing propagates further.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::ops::OpStatus;
use common::requests::AskRequest;
use common::schema::parse_schema;

use super::helpers::{show_toast, ToastKind};
use super::messages::Msg;
use super::state::SqlAssistantComponent;

/// Central update function for the component.
pub fn update(
    component: &mut SqlAssistantComponent,
    ctx: &Context<SqlAssistantComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateQuestion(value) => {
            component.question = value;
            true
        }

        Msg::RunQuestion => {
            let Some(request) = AskRequest::new(&component.question) else {
                show_toast("Please enter a question", ToastKind::Error);
                return false;
            };

            let token = component.ask.begin();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.ask(&request).await;
                link.send_message(Msg::AskSettled { token, result });
            });
            true
        }

        Msg::AskSettled { token, result } => {
            if !component.ask.settle(token, result) {
                return false;
            }
            match component.ask.status() {
                OpStatus::Completed(payload) => match &payload.error {
                    Some(warning) => show_toast(warning, ToastKind::Warning),
                    None => show_toast("Query executed successfully", ToastKind::Success),
                },
                OpStatus::Failed(message) => {
                    gloo_console::error!(format!("ask request failed: {message}"));
                    show_toast(message, ToastKind::Error);
                }
                _ => {}
            }
            true
        }

        Msg::LoadSchema => {
            let token = component.schema.begin();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.fetch_schema().await;
                link.send_message(Msg::SchemaSettled { token, result });
            });
            true
        }

        Msg::SchemaSettled { token, result } => {
            let applied = component
                .schema
                .settle(token, result.map(|raw| parse_schema(&raw)));
            if !applied {
                return false;
            }
            if let OpStatus::Failed(message) = component.schema.status() {
                gloo_console::error!(format!("schema request failed: {message}"));
            }
            true
        }

        Msg::RunEvaluation => {
            let token = component.evaluation.begin();
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.run_evaluation().await;
                link.send_message(Msg::EvaluationSettled { token, result });
            });
            true
        }

        Msg::EvaluationSettled { token, result } => {
            if !component.evaluation.settle(token, result) {
                return false;
            }
            if let OpStatus::Failed(message) = component.evaluation.status() {
                gloo_console::error!(format!("evaluation request failed: {message}"));
            }
            true
        }
    }
}
