use contracts::usecases::u601_sql_assistant::{
    AssistantError, ConnectResponse, ConnectionParams, QueryRequest, QueryResponse,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_utils::api_url;

/// Open a database connection on the assistant service
pub async fn connect(params: &ConnectionParams) -> Result<ConnectResponse, AssistantError> {
    post_json("/api/connect", params).await
}

/// Translate and execute a natural-language query
pub async fn run_query(request: &QueryRequest) -> Result<QueryResponse, AssistantError> {
    post_json("/api/query", request).await
}

/// POST a JSON body and decode the JSON answer.
///
/// The HTTP status is not checked: the service reports query failures as
/// HTTP 500 with a regular `{status, message}` body.
async fn post_json<B, R>(path: &str, body: &B) -> Result<R, AssistantError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let url = api_url(path);
    log::debug!("POST {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| AssistantError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| AssistantError::Transport(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    log::debug!("POST {} -> {}", url, status);

    response.json::<R>().await.map_err(|e| {
        AssistantError::Transport(format!("Failed to parse response (HTTP {}): {}", status, e))
    })
}
