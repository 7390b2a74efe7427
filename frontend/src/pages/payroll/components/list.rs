use crate::api::PayrollRecord;
use crate::components::layout::LoadingIndicator;
use crate::pages::payroll::utils::{format_amount, visible_amount};
use leptos::*;

pub const EMPTY_LIST_TEXT: &str = "No payroll records found.";

fn record_key(position: usize, record: &PayrollRecord) -> String {
    if record.id.is_empty() {
        format!("#{}", position)
    } else {
        record.id.clone()
    }
}

#[component]
fn PayrollItem(record: PayrollRecord) -> impl IntoView {
    let nurse = record
        .nurse_id
        .as_ref()
        .and_then(|nurse| nurse.display_name())
        .unwrap_or_else(|| "N/A".to_string());
    let period = format!(
        "{} {}",
        record.month.clone().unwrap_or_default(),
        record.year.map(|y| y.to_string()).unwrap_or_default()
    );
    let salary = record.salary.map(format_amount).unwrap_or_default();
    let overtime = visible_amount(record.overtime).map(format_amount);
    let deductions = visible_amount(record.deductions).map(format_amount);

    view! {
        <li class="payroll-item">
            <p><strong>"Nurse Name: "</strong>{nurse}</p>
            <p><strong>"Month: "</strong>{period}</p>
            <p><strong>"Salary: "</strong>{salary}</p>
            {overtime.map(|amount| view! { <p><strong>"Overtime: "</strong>{amount}</p> })}
            {deductions.map(|amount| view! { <p><strong>"Deductions: "</strong>{amount}</p> })}
        </li>
    }
}

#[component]
pub fn PayrollList(
    #[prop(into)] records: MaybeSignal<Vec<PayrollRecord>>,
    #[prop(into)] loading: MaybeSignal<bool>,
) -> impl IntoView {
    let records = Signal::derive(move || records.get());
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingIndicator /> }>
            <ul class="payroll-list space-y-3">
                <Show
                    when=move || records.with(|list| !list.is_empty())
                    fallback=|| view! { <li>{EMPTY_LIST_TEXT}</li> }
                >
                    <For
                        each=move || records.get().into_iter().enumerate()
                        key=|(position, record)| record_key(*position, record)
                        children=|(_, record): (usize, PayrollRecord)| view! { <PayrollItem record=record /> }
                    />
                </Show>
            </ul>
        </Show>
    }
}
