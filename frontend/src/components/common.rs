use leptos::*;

const SUBMIT_BUTTON_CLASSES: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm disabled:opacity-50 disabled:cursor-not-allowed";

/// Form submit button. While `pending` it is disabled and shows a spinner.
#[component]
pub fn SubmitButton(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {}", SUBMIT_BUTTON_CLASSES, class);
    view! {
        <button type="submit" class=class disabled=move || pending.get()>
            <Show when=move || pending.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
