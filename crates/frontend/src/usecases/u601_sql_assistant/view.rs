use super::render::{history_summary, ResultView};
use super::state::HistoryEntry;
use super::view_model::SqlAssistantViewModel;
use crate::shared::date_utils::{format_datetime, format_time};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u601_sql_assistant::{ConnectionField, SqlAssistant};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SqlAssistantPage() -> impl IntoView {
    let vm = SqlAssistantViewModel::new();

    view! {
        <PageFrame page_id=page_id(&SqlAssistant::full_name(), PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h1 class="page__title">{SqlAssistant::display_name()}</h1>
                <p class="page__subtitle">{SqlAssistant::description()}</p>
            </div>

            <div class="page__content app-container">
                <ConnectionPanel vm=vm />

                {move || vm.error().map(|e| view! { <div class="error-message warning-box text-error">{e}</div> })}

                <QuerySection vm=vm />

                <div class="results-section">
                    <div class="results-panel">
                        <h3>"Results"</h3>
                        <ResultsDisplay vm=vm />
                        <AgentTrace vm=vm />
                    </div>
                    <HistoryPanel vm=vm />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn ConnectionPanel(vm: SqlAssistantViewModel) -> impl IntoView {
    view! {
        <div class="connection-panel">
            <h2>"Database Connection"</h2>
            <div class="input-group">
                {ConnectionField::ALL
                    .into_iter()
                    .map(|field| {
                        let input_type = if field.is_secret() { "password" } else { "text" };
                        view! {
                            <input
                                class="form__input"
                                type=input_type
                                placeholder=field.placeholder()
                                prop:value=move || vm.connection_value(field)
                                on:input=move |ev| vm.set_connection_field(field, event_target_value(&ev))
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.connect_command()
                disabled=Signal::derive(move || vm.is_loading())
            >
                {move || if vm.is_loading() { "Connecting..." } else { "Connect" }}
            </Button>
        </div>
    }
}

#[component]
fn QuerySection(vm: SqlAssistantViewModel) -> impl IntoView {
    view! {
        <div class="query-section">
            <h2>"Enter Your Request"</h2>
            <textarea
                class="form__textarea"
                rows="4"
                placeholder="e.g., Show all customers from California"
                prop:value=move || vm.query_text()
                on:input=move |ev| vm.set_query_text(event_target_value(&ev))
                disabled=move || vm.is_loading()
            />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| vm.run_query_command()
                disabled=Signal::derive(move || vm.is_loading())
            >
                {move || if vm.is_loading() { "Processing..." } else { "Execute" }}
            </Button>
        </div>
    }
}

#[component]
fn ResultsDisplay(vm: SqlAssistantViewModel) -> impl IntoView {
    move || match vm.result_view() {
        ResultView::Placeholder(message) => {
            view! { <div class="no-results">{message}</div> }.into_any()
        }
        ResultView::Text(text) => view! { <div class="result-text">{text}</div> }.into_any(),
        ResultView::Table { headers, rows } => {
            view! { <ResultTable headers=headers rows=rows /> }.into_any()
        }
    }
}

#[component]
fn ResultTable(headers: Vec<String>, rows: Vec<Vec<String>>) -> impl IntoView {
    view! {
        <div class="result-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        {headers
                            .into_iter()
                            .map(|header| view! { <TableHeaderCell>{header}</TableHeaderCell> })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            view! {
                                <TableRow>
                                    {row
                                        .into_iter()
                                        .map(|cell| {
                                            view! {
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{cell}</TableCellLayout>
                                                </TableCell>
                                            }
                                        })
                                        .collect_view()}
                                </TableRow>
                            }
                        })
                        .collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

/// Pipeline steps the service reported for the latest query
#[component]
fn AgentTrace(vm: SqlAssistantViewModel) -> impl IntoView {
    view! {
        <Show when=move || vm.state.with(|s| !s.last_trace.is_empty())>
            <details class="agent-trace">
                <summary>"Agent trace"</summary>
                <ul>
                    {move || {
                        vm.state
                            .with(|s| s.last_trace.clone())
                            .into_iter()
                            .map(|step| {
                                view! {
                                    <li>
                                        <span class="agent-trace__time" title=format_datetime(&step.timestamp)>
                                            {format_time(&step.timestamp)}
                                        </span>
                                        " "
                                        <strong>{step.state}</strong>
                                        " "
                                        {step.message.unwrap_or_default()}
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </details>
        </Show>
    }
}

#[component]
fn HistoryPanel(vm: SqlAssistantViewModel) -> impl IntoView {
    view! {
        <div class="history-panel">
            <h3>"History"</h3>
            <For
                each=move || vm.state.with(|s| s.history.clone())
                key=|entry| entry.id
                children=move |entry: HistoryEntry| {
                    let summary = history_summary(entry.result.as_ref());
                    view! {
                        <div class="history-item">
                            <p><strong>"Query:"</strong>" "{entry.query}</p>
                            <p><strong>"SQL:"</strong>" "<code>{entry.sql.unwrap_or_default()}</code></p>
                            <p><strong>"Result:"</strong>" "{summary}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
