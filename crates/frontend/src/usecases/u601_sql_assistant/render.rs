//! Result payload to renderable output.

use contracts::usecases::u601_sql_assistant::ResultPayload;
use serde_json::Value;

pub const SUBMIT_PROMPT: &str = "Submit a query to see results";
pub const NO_RESULTS: &str = "No results found";

/// What the results panel shows
#[derive(Clone, Debug, PartialEq)]
pub enum ResultView {
    Placeholder(&'static str),
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// Headers come from the first record. Each row lists its own record's
/// values by position, so rows with other keys are not realigned.
pub fn render_result(payload: Option<&ResultPayload>) -> ResultView {
    match payload {
        None => ResultView::Placeholder(SUBMIT_PROMPT),
        Some(ResultPayload::Text(text)) if text.is_empty() => {
            ResultView::Placeholder(SUBMIT_PROMPT)
        }
        Some(ResultPayload::Text(text)) => ResultView::Text(text.clone()),
        Some(ResultPayload::Rows(records)) => match records.first() {
            None => ResultView::Placeholder(NO_RESULTS),
            Some(first) => ResultView::Table {
                headers: first.columns().map(str::to_string).collect(),
                rows: records
                    .iter()
                    .map(|record| record.values().map(cell_text).collect())
                    .collect(),
            },
        },
    }
}

/// String form of a cell value
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// One-line result description for a history item
pub fn history_summary(payload: Option<&ResultPayload>) -> String {
    match payload {
        Some(ResultPayload::Text(text)) => text.clone(),
        Some(rows) => format!("{} rows returned", rows.row_count().unwrap_or_default()),
        None => String::new(),
    }
}
