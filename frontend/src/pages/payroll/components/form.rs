use crate::components::{common::SubmitButton, error::InlineErrorMessage, layout::SuccessMessage};
use crate::pages::payroll::utils::{MessageState, PayrollFormState};
use leptos::*;

#[component]
fn NumberField(
    #[prop(into)] placeholder: String,
    value: RwSignal<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            type="number"
            step="any"
            placeholder=placeholder.clone()
            aria-label=placeholder
            required=required
            class="input-field mt-1 block w-full border rounded px-2 py-1"
            prop:value=move || value.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn PayrollForm(
    #[prop(into)] identity_label: String,
    state: PayrollFormState,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    let error = Signal::derive(move || message.with(|msg| msg.error.clone()));
    view! {
        <form class="payroll-form space-y-3" on:submit=move |ev| on_submit.call(ev)>
            <input
                type="text"
                placeholder="User"
                value=identity_label
                disabled=true
                class="input-field mt-1 block w-full border rounded px-2 py-1 bg-surface-muted"
            />
            <NumberField placeholder="Month" value=state.month_signal() required=true />
            <NumberField placeholder="Year" value=state.year_signal() required=true />
            <NumberField placeholder="Salary" value=state.salary_signal() required=true />
            <NumberField placeholder="Overtime" value=state.overtime_signal() />
            <NumberField placeholder="Deductions" value=state.deductions_signal() />
            <InlineErrorMessage error=error />
            {move || message.with(|msg| msg.success.clone()).map(|text| view! { <SuccessMessage message=text /> })}
            <SubmitButton class="submit-btn w-full" pending=pending>
                "Add Payroll"
            </SubmitButton>
        </form>
    }
}
