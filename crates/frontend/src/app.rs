use crate::usecases::u601_sql_assistant::SqlAssistantPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SqlAssistantPage />
    }
}
