//! View rendering for the text-to-SQL assistant component.
//!
//! Layout: a schema sidebar (parsed tables as name + column chips, unparsed
//! fragments as raw monospace text), a question bar with a run button, the
//! generated SQL with its result rows, and the evaluation panel. All state
//! lives in the operation slots; this module only reads them.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::ask::{display_value, AskResult};
use common::model::evaluation::{CaseVerdict, EvalCase, EvaluationResult};
use common::ops::OpStatus;
use common::schema::TableFragment;

use super::messages::Msg;
use super::state::SqlAssistantComponent;

/// Main view function: sidebar plus the question/result/evaluation column.
pub fn view(component: &SqlAssistantComponent, ctx: &Context<SqlAssistantComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="app-root">
            { build_schema_panel(component, link) }
            <main class="main-panel">
                <header class="main-header">
                    <h1>{ "Text-to-SQL Interface" }</h1>
                    <p>{ "Ask questions about your data in plain English." }</p>
                </header>
                { build_question_bar(component, link) }
                { build_result_card(component) }
                { build_evaluation_panel(component, link) }
            </main>
        </div>
    }
}

/// Sidebar with the parsed schema, a loading skeleton, or an error with a
/// reload affordance.
fn build_schema_panel(component: &SqlAssistantComponent, link: &Scope<SqlAssistantComponent>) -> Html {
    html! {
        <aside class="schema-panel">
            <div class="schema-panel-header">
                <h2>{ "Database Schema" }</h2>
                <p class="schema-subtitle">{ "Tables and columns" }</p>
            </div>
            {
                match component.schema.status() {
                    OpStatus::Idle | OpStatus::Pending => html! {
                        <div class="schema-skeleton">
                            { for (0..3).map(|_| html! { <div class="skeleton-line" /> }) }
                        </div>
                    },
                    OpStatus::Failed(message) => html! {
                        <div class="schema-error">
                            <p>{ message.clone() }</p>
                            <button onclick={link.callback(|_| Msg::LoadSchema)}>{ "Reload" }</button>
                        </div>
                    },
                    OpStatus::Completed(fragments) => html! {
                        <div class="table-cards">
                            { for fragments.iter().map(build_table_card) }
                        </div>
                    },
                }
            }
        </aside>
    }
}

/// One sidebar card: a recognized table with its column chips, or the raw
/// text of a fragment the parser could not recognize.
fn build_table_card(fragment: &TableFragment) -> Html {
    match fragment {
        TableFragment::Parsed { table, columns } => html! {
            <div class="table-card">
                <div class="table-card-header">
                    <h3>{ table.clone() }</h3>
                    <span class="column-count">{ format!("{} cols", columns.len()) }</span>
                </div>
                <div class="column-chips">
                    { for columns.iter().map(|column| html! {
                        <span class="column-chip">{ column.clone() }</span>
                    }) }
                </div>
            </div>
        },
        TableFragment::Unparsed { raw } => html! {
            <div class="table-card">
                <p class="raw-fragment">{ raw.clone() }</p>
            </div>
        },
    }
}

/// Question input plus the run button. Enter submits; the button is disabled
/// while an ask is in flight.
fn build_question_bar(component: &SqlAssistantComponent, link: &Scope<SqlAssistantComponent>) -> Html {
    let pending = component.ask.is_pending();
    html! {
        <div class="question-bar">
            <input
                class="question-input"
                placeholder="e.g., \"List all customers who live in Adama\""
                value={component.question.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateQuestion(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    (e.key() == "Enter").then_some(Msg::RunQuestion)
                })}
            />
            <button
                class="run-button"
                disabled={pending}
                onclick={link.callback(|_| Msg::RunQuestion)}
            >
                { if pending { "Running…" } else { "Run" } }
            </button>
        </div>
    }
}

/// Generated SQL and its rows. Nothing renders for a soft-error payload —
/// the warning toast already carried the message — nor for a failed ask.
fn build_result_card(component: &SqlAssistantComponent) -> Html {
    match component.ask.status() {
        OpStatus::Pending => html! {
            <div class="result-skeleton">
                <div class="skeleton-line wide" />
                <div class="skeleton-block" />
            </div>
        },
        OpStatus::Completed(result) if result.error.is_none() => build_result_table(result),
        _ => html! {},
    }
}

fn build_result_table(result: &AskResult) -> Html {
    html! {
        <div class="result-card">
            <div class="result-card-header">
                { format!("Generated SQL: {}", result.sql) }
            </div>
            <table class="result-table">
                <thead>
                    <tr>
                        { for result.columns.iter().map(|column| html! { <th>{ column.clone() }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    { for result.data.iter().map(|row| html! {
                        <tr>
                            { for result.columns.iter().map(|column| html! {
                                <td>{ row.get(column).map(display_value).unwrap_or_default() }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

/// Evaluation panel: trigger button plus the current slot state — hint,
/// progress, the failure message, or the full report.
fn build_evaluation_panel(
    component: &SqlAssistantComponent,
    link: &Scope<SqlAssistantComponent>,
) -> Html {
    let pending = component.evaluation.is_pending();
    html! {
        <section class="evaluation-panel">
            <div class="evaluation-header">
                <h2>{ "Evaluation" }</h2>
                <button
                    class="evaluation-button"
                    disabled={pending}
                    onclick={link.callback(|_| Msg::RunEvaluation)}
                >
                    { if pending { "Running…" } else { "Run evaluation" } }
                </button>
            </div>
            {
                match component.evaluation.status() {
                    OpStatus::Idle => html! {
                        <p class="evaluation-hint">{ "Compare generated SQL against the gold test set." }</p>
                    },
                    OpStatus::Pending => html! {
                        <p class="evaluation-hint">{ "Running the test set, this can take a while…" }</p>
                    },
                    OpStatus::Failed(message) => html! {
                        <p class="evaluation-error">{ message.clone() }</p>
                    },
                    OpStatus::Completed(report) => build_evaluation_report(report),
                }
            }
        </section>
    }
}

fn build_evaluation_report(report: &EvaluationResult) -> Html {
    html! {
        <>
            <div class="evaluation-summary">
                <span class="accuracy">{ report.overall_accuracy_percent.clone() }</span>
                <span class="metric">{ report.metric.clone() }</span>
                <span class="passed-count">{ format!("{} / {} passed", report.passed(), report.total()) }</span>
            </div>
            <table class="evaluation-table">
                <thead>
                    <tr>
                        <th>{ "Question" }</th>
                        <th>{ "Generated SQL" }</th>
                        <th>{ "Expected SQL" }</th>
                        <th>{ "Status" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for report.detailed_results.iter().map(build_case_row) }
                </tbody>
            </table>
        </>
    }
}

fn build_case_row(case: &EvalCase) -> Html {
    let verdict_class = match case.verdict() {
        CaseVerdict::Pass => "case-pass",
        CaseVerdict::Fail => "case-fail",
    };
    html! {
        <tr class={verdict_class}>
            <td>{ case.question.clone() }</td>
            <td class="mono">{ case.generated_sql.clone() }</td>
            <td class="mono">{ case.expected_sql.clone() }</td>
            <td>
                <span class={classes!("status-badge", verdict_class)}>{ case.status.clone() }</span>
                {
                    match &case.debug {
                        Some(debug) => html! { <p class="case-debug">{ debug.clone() }</p> },
                        None => html! {},
                    }
                }
            </td>
        </tr>
    }
}
