use super::api;
use super::render::{render_result, ResultView};
use super::state::{create_state, AssistantState};
use contracts::usecases::u601_sql_assistant::ConnectionField;
use leptos::prelude::*;

/// ViewModel for the SQL assistant page
///
/// - All state lives in one `AssistantState` signal
/// - Field setters forward to the state transitions
/// - Commands run the HTTP calls and apply the outcome on completion
///
/// `loading` only disables the controls. Nothing cancels a request in
/// flight, and the response that arrives last overwrites the state.
#[derive(Clone, Copy)]
pub struct SqlAssistantViewModel {
    pub state: RwSignal<AssistantState>,
}

impl SqlAssistantViewModel {
    pub fn new() -> Self {
        Self {
            state: create_state(),
        }
    }

    pub fn connection_value(&self, field: ConnectionField) -> String {
        self.state.with(|s| s.connection.get(field).to_string())
    }

    pub fn set_connection_field(&self, field: ConnectionField, value: String) {
        self.state
            .update(|s| s.update_connection_field(field, value));
    }

    pub fn query_text(&self) -> String {
        self.state.with(|s| s.query.clone())
    }

    pub fn set_query_text(&self, value: String) {
        self.state.update(|s| s.update_query_text(value));
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn result_view(&self) -> ResultView {
        self.state.with(|s| render_result(s.result.as_ref()))
    }

    /// Send the connection form to the service
    pub fn connect_command(&self) {
        let state = self.state;
        let params = state.with_untracked(|s| s.connection.clone());
        state.update(AssistantState::begin_request);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::connect(&params).await;
            state.update(|s| s.finish_connect(outcome));
        });
    }

    /// Run the current query text; blank text is ignored
    pub fn run_query_command(&self) {
        let state = self.state;
        let Some(request) = state.with_untracked(AssistantState::prepare_query) else {
            return;
        };
        state.update(AssistantState::begin_request);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::run_query(&request).await;
            state.update(|s| s.finish_query(request.query, outcome));
        });
    }
}

impl Default for SqlAssistantViewModel {
    fn default() -> Self {
        Self::new()
    }
}
