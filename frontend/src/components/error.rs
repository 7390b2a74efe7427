use crate::api::ApiError;
use leptos::*;

fn detail_lines(error: &ApiError) -> Vec<String> {
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|err| err.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            {move || error.get().map(|e| {
                let lines = detail_lines(&e);
                let code = (!e.code.is_empty() && e.code != "UNKNOWN").then(|| e.code.clone());
                view! {
                    <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2" role="alert">
                        <div class="font-bold">{e.error.clone()}</div>
                        {(!lines.is_empty()).then(|| view! {
                            <ul class="list-disc list-inside text-sm">
                                {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                            </ul>
                        })}
                        {code.map(|code| view! { <div class="text-xs opacity-75">{format!("Code: {}", code)}</div> })}
                    </div>
                }
            })}
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["Salary is required", "Year must be a number"]
                })),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Validation failed"));
        assert!(html.contains("Salary is required"));
        assert!(html.contains("Year must be a number"));
        assert!(html.contains("Code: VALIDATION_ERROR"));
    }

    #[test]
    fn inline_error_hides_unknown_code_and_empty_state() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::unknown("Failed to parse response")));
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(html.contains("Failed to parse response"));
        assert!(!html.contains("Code:"));

        let html = render_to_string(move || {
            let signal = create_rw_signal(None::<ApiError>);
            view! { <InlineErrorMessage error=signal /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
