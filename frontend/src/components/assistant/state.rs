//! Component state for the text-to-SQL assistant.
//!
//! Besides the question text, the state is three independent operation
//! slots — schema load, ask, evaluation run — each owned exclusively by this
//! component and only ever transitioned from the `update` module.

use common::model::ask::AskResult;
use common::model::evaluation::EvaluationResult;
use common::ops::OpSlot;
use common::schema::TableFragment;

use crate::api::QueryClient;
use crate::config::ApiConfig;

/// Main state container for the [`SqlAssistantComponent`].
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules.
pub struct SqlAssistantComponent {
    /// Current content of the question input.
    pub question: String,

    /// Schema sidebar state; completed payload is the parsed fragment list.
    pub schema: OpSlot<Vec<TableFragment>>,

    /// State of the most recent ask invocation.
    pub ask: OpSlot<AskResult>,

    /// State of the most recent evaluation run.
    pub evaluation: OpSlot<EvaluationResult>,

    /// HTTP client, built once from startup configuration.
    pub client: QueryClient,

    /// Guards the one-time schema load on first render.
    pub loaded: bool,
}

impl SqlAssistantComponent {
    pub fn new() -> Self {
        SqlAssistantComponent {
            question: String::new(),
            schema: OpSlot::new(),
            ask: OpSlot::new(),
            evaluation: OpSlot::new(),
            client: QueryClient::new(&ApiConfig::from_env()),
            loaded: false,
        }
    }
}
