use leptos::*;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <main class="max-w-3xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading flex justify-center items-center gap-2 p-8 text-fg-muted">
            <div class="animate-spin rounded-full h-5 w-5 border-b-2 border-action-primary-bg"></div>
            <span>"Loading..."</span>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
