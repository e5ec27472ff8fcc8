use contracts::usecases::u601_sql_assistant::{
    AgentStep, AssistantError, ConnectResponse, ConnectionField, ConnectionParams,
    QueryRequest, QueryResponse, ResultPayload,
};
use leptos::prelude::*;
use uuid::Uuid;

pub const CONNECTION_FAILED_PREFIX: &str = "Connection failed: ";
pub const QUERY_FAILED_PREFIX: &str = "Query failed : ";

/// One completed query, newest first in `AssistantState::history`
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// Key for keyed list rendering only
    pub id: Uuid,
    pub query: String,
    pub sql: Option<String>,
    pub result: Option<ResultPayload>,
}

/// Whole view state of the assistant page.
///
/// Transitions are plain methods so they can be exercised without a browser;
/// `SqlAssistantViewModel` wraps this in a signal and performs the HTTP calls.
#[derive(Clone, Debug, Default)]
pub struct AssistantState {
    pub connection: ConnectionParams,
    pub query: String,
    pub result: Option<ResultPayload>,
    pub history: Vec<HistoryEntry>,
    pub loading: bool,
    pub error: Option<String>,
    /// Pipeline steps reported with the latest query response
    pub last_trace: Vec<AgentStep>,
}

impl AssistantState {
    pub fn update_connection_field(&mut self, field: ConnectionField, value: String) {
        self.connection.set(field, value);
    }

    pub fn update_query_text(&mut self, value: String) {
        self.query = value;
    }

    /// Enter the in-flight state shared by connect and query
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Request to send for the current text, `None` when it is blank
    pub fn prepare_query(&self) -> Option<QueryRequest> {
        if self.query.trim().is_empty() {
            return None;
        }
        Some(QueryRequest {
            query: self.query.clone(),
        })
    }

    pub fn finish_connect(&mut self, outcome: Result<ConnectResponse, AssistantError>) {
        self.loading = false;
        match outcome.and_then(ConnectResponse::into_result) {
            Ok(message) => {
                log::debug!("connected: {}", message.unwrap_or_default());
                self.error = None;
            }
            Err(e) => {
                log::error!("connect failed: {:?}", e);
                self.error = Some(format!("{}{}", CONNECTION_FAILED_PREFIX, e));
            }
        }
    }

    /// Apply a query response. `sent` is the text captured when the request
    /// went out, so edits made while it was in flight do not reach history.
    pub fn finish_query(&mut self, sent: String, outcome: Result<QueryResponse, AssistantError>) {
        self.loading = false;
        let mut response = match outcome {
            Ok(response) => response,
            Err(e) => {
                self.fail_query(e);
                self.last_trace.clear();
                return;
            }
        };
        self.last_trace = std::mem::take(&mut response.states);

        if !response.is_success() {
            self.fail_query(response.failure());
            return;
        }
        let payload = match response.take_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.fail_query(e);
                return;
            }
        };

        self.result = payload.clone();
        self.history.insert(
            0,
            HistoryEntry {
                id: Uuid::new_v4(),
                query: sent,
                sql: response.sql,
                result: payload,
            },
        );
        self.error = None;
    }

    fn fail_query(&mut self, e: AssistantError) {
        log::error!("query failed: {:?}", e);
        self.error = Some(format!("{}{}", QUERY_FAILED_PREFIX, e));
    }
}

pub fn create_state() -> RwSignal<AssistantState> {
    RwSignal::new(AssistantState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_sql_assistant::{QueryStatus, Record};
    use serde_json::json;

    fn success_response() -> QueryResponse {
        serde_json::from_value(json!({
            "status": "success",
            "sql": "SELECT * FROM customers WHERE state='CA'",
            "result": [{"id": 1, "name": "A"}],
            "states": [{"state": "STOP", "message": "Process completed successfully", "timestamp": "2024-03-15T14:02:26"}]
        }))
        .unwrap()
    }

    #[test]
    fn test_update_connection_field_preserves_others() {
        let mut state = AssistantState::default();
        state.update_connection_field(ConnectionField::Database, "shop".to_string());
        assert_eq!(state.connection.database, "shop");
        assert_eq!(state.connection.host, "localhost");
        assert_eq!(state.connection.user, "root");
        assert_eq!(state.connection.password, "");
        assert_eq!(state.connection.port, "");
    }

    #[test]
    fn test_blank_query_is_not_sent() {
        let mut state = AssistantState::default();
        assert_eq!(state.prepare_query(), None);
        state.update_query_text("   \n\t ".to_string());
        assert_eq!(state.prepare_query(), None);
        assert!(!state.loading);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_query_keeps_untrimmed_text() {
        let mut state = AssistantState::default();
        state.update_query_text("  list orders ".to_string());
        assert_eq!(
            state.prepare_query(),
            Some(QueryRequest {
                query: "  list orders ".to_string()
            })
        );
    }

    #[test]
    fn test_begin_request_clears_error() {
        let mut state = AssistantState {
            error: Some("Query failed : boom".to_string()),
            ..Default::default()
        };
        state.begin_request();
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_connect_success_scenario() {
        let mut state = AssistantState::default();
        state.update_connection_field(ConnectionField::Password, String::new());
        state.update_connection_field(ConnectionField::Database, "shop".to_string());
        state.update_connection_field(ConnectionField::Port, "5432".to_string());
        state.begin_request();
        state.finish_connect(Ok(ConnectResponse {
            success: true,
            message: Some("Connected successfully".to_string()),
        }));
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_connect_failure_message() {
        let mut state = AssistantState::default();
        state.begin_request();
        state.finish_connect(Ok(ConnectResponse {
            success: false,
            message: Some("MySQL Error: Unknown database 'shop'".to_string()),
        }));
        assert_eq!(
            state.error.as_deref(),
            Some("Connection failed: MySQL Error: Unknown database 'shop'")
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_connect_transport_failure() {
        let mut state = AssistantState::default();
        state.begin_request();
        state.finish_connect(Err(AssistantError::Transport(
            "Failed to send request".to_string(),
        )));
        assert_eq!(
            state.error.as_deref(),
            Some("Connection failed: Failed to send request")
        );
        assert!(!state.loading);
    }

    #[test]
    fn test_query_success_scenario() {
        let mut state = AssistantState::default();
        state.update_query_text("Show all customers from California".to_string());
        let sent = state.prepare_query().unwrap().query;
        state.begin_request();
        state.finish_query(sent, Ok(success_response()));

        let expected = ResultPayload::Rows(vec![Record::new().with("id", 1).with("name", "A")]);
        assert_eq!(state.result, Some(expected.clone()));
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history[0].query, "Show all customers from California");
        assert_eq!(
            state.history[0].sql.as_deref(),
            Some("SELECT * FROM customers WHERE state='CA'")
        );
        assert_eq!(state.history[0].result, Some(expected));
        assert_eq!(state.last_trace.len(), 1);
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_history_is_newest_first() {
        let mut state = AssistantState::default();
        state.finish_query("first".to_string(), Ok(success_response()));
        let mut second = success_response();
        second.result = Some(ResultPayload::Text("Query executed successfully".to_string()).into());
        state.finish_query("second".to_string(), Ok(second));

        assert_eq!(state.history.len(), 2);
        assert_eq!(state.history[0].query, "second");
        assert_eq!(state.history[1].query, "first");
        assert_ne!(state.history[0].id, state.history[1].id);
        assert_eq!(
            state.result,
            Some(ResultPayload::Text("Query executed successfully".to_string()))
        );
    }

    #[test]
    fn test_query_failure_leaves_result_and_history() {
        let mut state = AssistantState::default();
        state.finish_query("first".to_string(), Ok(success_response()));
        let result_before = state.result.clone();

        state.begin_request();
        state.finish_query(
            "broken".to_string(),
            Ok(QueryResponse {
                status: QueryStatus::Error,
                message: Some("Maximum refinement attempts reached".to_string()),
                sql: None,
                result: None,
                states: Vec::new(),
            }),
        );

        assert_eq!(state.history.len(), 1);
        assert_eq!(state.result, result_before);
        assert_eq!(
            state.error.as_deref(),
            Some("Query failed : Maximum refinement attempts reached")
        );
        assert!(state.last_trace.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_unknown_status_is_failure() {
        let mut state = AssistantState::default();
        let mut response = success_response();
        response.status = QueryStatus::Other("ok".to_string());
        response.message = None;
        state.finish_query("q".to_string(), Ok(response));
        assert!(state.history.is_empty());
        assert_eq!(state.result, None);
        assert_eq!(state.error.as_deref(), Some("Query failed : "));
    }

    #[test]
    fn test_query_transport_failure() {
        let mut state = AssistantState::default();
        state.begin_request();
        state.finish_query(
            "q".to_string(),
            Err(AssistantError::Transport("Failed to parse response".to_string())),
        );
        assert_eq!(
            state.error.as_deref(),
            Some("Query failed : Failed to parse response")
        );
        assert!(state.history.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn test_last_response_wins() {
        let mut state = AssistantState::default();
        state.finish_query("slow".to_string(), Ok(success_response()));
        state.finish_connect(Ok(ConnectResponse {
            success: false,
            message: Some("lost".to_string()),
        }));
        assert_eq!(state.error.as_deref(), Some("Connection failed: lost"));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_transport_failure_clears_previous_trace() {
        let mut state = AssistantState::default();
        state.finish_query("first".to_string(), Ok(success_response()));
        assert_eq!(state.last_trace.len(), 1);

        state.begin_request();
        state.finish_query(
            "second".to_string(),
            Err(AssistantError::Transport("Failed to send request".to_string())),
        );
        assert!(state.last_trace.is_empty());
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_non_string_status_surfaces_service_message() {
        let mut state = AssistantState::default();
        let response: QueryResponse = serde_json::from_value(json!({
            "status": null,
            "message": "boom",
            "result": 5
        }))
        .unwrap();
        state.begin_request();
        state.finish_query("q".to_string(), Ok(response));
        assert_eq!(state.error.as_deref(), Some("Query failed : boom"));
        assert!(state.history.is_empty());
        assert_eq!(state.result, None);
        assert!(!state.loading);
    }

    #[test]
    fn test_success_with_unreadable_result_is_not_recorded() {
        let mut state = AssistantState::default();
        let response: QueryResponse = serde_json::from_value(json!({
            "status": "success",
            "sql": "SELECT 1",
            "result": 5,
            "states": [{"state": "STOP", "timestamp": "2024-03-15T14:02:26"}]
        }))
        .unwrap();
        state.finish_query("q".to_string(), Ok(response));
        assert!(state.history.is_empty());
        assert_eq!(state.result, None);
        assert_eq!(state.last_trace.len(), 1);
        assert!(state
            .error
            .as_deref()
            .unwrap_or_default()
            .starts_with("Query failed : Failed to parse response"));
    }
}
