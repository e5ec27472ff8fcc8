use super::error::AssistantError;
use super::payload::ResultPayload;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Ответ на `POST /api/connect`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectResponse {
    /// Отсутствующее, null или не bool значение считается неуспехом
    #[serde(default, deserialize_with = "lenient_flag")]
    pub success: bool,

    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
}

impl ConnectResponse {
    /// Успех возвращает сообщение сервиса, неуспех превращается в `AssistantError::Connection`
    pub fn into_result(self) -> Result<Option<String>, AssistantError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(AssistantError::Connection(self.message.unwrap_or_default()))
        }
    }
}

/// Статус ответа на `POST /api/query`.
///
/// Успехом считается только строка "success"; любое другое значение,
/// включая отсутствующее, null или не строку, означает ошибку.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QueryStatus {
    Success,
    Error,
    Other(String),
}

impl Default for QueryStatus {
    fn default() -> Self {
        QueryStatus::Other(String::new())
    }
}

impl From<String> for QueryStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => QueryStatus::Success,
            "error" => QueryStatus::Error,
            _ => QueryStatus::Other(value),
        }
    }
}

impl From<QueryStatus> for String {
    fn from(status: QueryStatus) -> Self {
        match status {
            QueryStatus::Success => "success".to_string(),
            QueryStatus::Error => "error".to_string(),
            QueryStatus::Other(s) => s,
        }
    }
}

/// Шаг конвейера ассистента (START, INPUT, PROCESS, OBSERVATION, OUTPUT, STOP)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStep {
    pub state: String,

    #[serde(default)]
    pub message: Option<String>,

    /// ISO-8601 без часового пояса, как его отдаёт сервис
    #[serde(default)]
    pub timestamp: String,
}

/// Поле `result` как оно пришло: разобранный результат или значение
/// неизвестной формы. Форма проверяется только для успешного ответа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultField {
    Payload(ResultPayload),
    Malformed(Value),
}

impl From<ResultPayload> for ResultField {
    fn from(payload: ResultPayload) -> Self {
        ResultField::Payload(payload)
    }
}

/// Ответ на `POST /api/query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "lenient_status")]
    pub status: QueryStatus,

    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,

    /// Сгенерированный SQL
    #[serde(default, deserialize_with = "lenient_text")]
    pub sql: Option<String>,

    #[serde(default)]
    pub result: Option<ResultField>,

    /// Непригодный трейс отбрасывается, чтобы не потерять `message`
    #[serde(default, deserialize_with = "lenient_steps")]
    pub states: Vec<AgentStep>,
}

impl QueryResponse {
    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    /// Ошибка, которую описывает неуспешный ответ
    pub fn failure(&self) -> AssistantError {
        AssistantError::Query(self.message.clone().unwrap_or_default())
    }

    /// Забрать результат успешного ответа; значение неизвестной формы
    /// означает, что ответ не разобран
    pub fn take_payload(&mut self) -> Result<Option<ResultPayload>, AssistantError> {
        match self.result.take() {
            None => Ok(None),
            Some(ResultField::Payload(payload)) => Ok(Some(payload)),
            Some(ResultField::Malformed(value)) => Err(AssistantError::Transport(format!(
                "Failed to parse response: unexpected result {}",
                value
            ))),
        }
    }
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(
        Option::<Value>::deserialize(deserializer)?,
        Some(Value::Bool(true))
    ))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_status<'de, D: Deserializer<'de>>(deserializer: D) -> Result<QueryStatus, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => QueryStatus::from(s),
        None | Some(Value::Null) => QueryStatus::default(),
        Some(other) => QueryStatus::Other(other.to_string()),
    })
}

fn lenient_steps<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<AgentStep>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}
