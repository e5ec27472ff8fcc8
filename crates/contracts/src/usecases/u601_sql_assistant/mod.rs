pub mod error;
pub mod payload;
pub mod request;
pub mod response;

pub use error::AssistantError;
pub use payload::{Record, ResultPayload};
pub use request::{ConnectionField, ConnectionParams, QueryRequest};
pub use response::{AgentStep, ConnectResponse, QueryResponse, QueryStatus, ResultField};

use crate::usecases::common::UseCaseMetadata;

pub struct SqlAssistant;

impl UseCaseMetadata for SqlAssistant {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "sql_assistant"
    }

    fn display_name() -> &'static str {
        "Natural Language SQL Assistant"
    }

    fn description() -> &'static str {
        "Перевод запроса на естественном языке в SQL и выполнение его на подключённой базе"
    }
}
