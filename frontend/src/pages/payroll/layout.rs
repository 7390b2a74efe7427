use crate::components::layout::Layout;
use leptos::*;
use leptos_meta::Title;

pub const PAGE_TITLE: &str = "Payroll Management";

#[component]
pub fn PayrollFrame(children: Children) -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />
        <Layout>
            <div class="payroll-container bg-surface-elevated shadow rounded-lg p-6 space-y-6">
                <h2 class="title text-lg font-medium text-fg">{PAGE_TITLE}</h2>
                {children()}
            </div>
        </Layout>
    }
}
