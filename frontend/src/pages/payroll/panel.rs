use super::{
    components::{form::PayrollForm, list::PayrollList},
    layout::PayrollFrame,
    view_model::use_payroll_view_model,
};
use crate::components::error::InlineErrorMessage;
use leptos::*;

#[component]
pub fn PayrollPage() -> impl IntoView {
    view! { <PayrollPanel /> }
}

#[component]
pub fn PayrollPanel() -> impl IntoView {
    let vm = use_payroll_view_model();

    // Runs once on mount in the browser.
    create_effect(move |_| vm.reload());

    view! {
        <PayrollFrame>
            <PayrollForm
                identity_label=vm.identity_label()
                state=vm.form_state
                message=vm.message
                pending=vm.create_action.pending()
                on_submit=Callback::new(vm.on_submit())
            />
            <InlineErrorMessage error=vm.list_error() />
            <PayrollList records=vm.records() loading=vm.loading() />
        </PayrollFrame>
    }
}
