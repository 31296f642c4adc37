// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::info, prelude::*};

use crate::theme::Theme;
use crate::ui::styles;

/// Whether the apply control is live. Plain emptiness check only:
/// whitespace-only drafts count as filled.
pub fn submit_enabled(prompt: &str, endpoint_url: &str) -> bool {
    !prompt.is_empty() && !endpoint_url.is_empty()
}

/// Prompt/endpoint configuration panel.
///
/// Holds local drafts for the system prompt and the endpoint URL and
/// hands them to the caller through `on_apply` when the apply control is
/// pressed. The panel itself performs no validation, no network call and
/// no persistence; what "apply" means is entirely the caller's business.
#[component]
pub fn DynamicData(theme: Theme, on_apply: Callback<(String, String), ()>) -> Element {
    let mut prompt = use_signal(|| "".to_string());
    let mut endpoint_url = use_signal(|| "".to_string());

    let enabled = submit_enabled(&prompt(), &endpoint_url());
    let apply = move |_e: Event<MouseData>| {
        if !submit_enabled(&prompt(), &endpoint_url()) {
            return;
        }
        info!("applying prompt/endpoint configuration");
        on_apply((prompt.cloned(), endpoint_url.cloned()));
    };

    rsx! {
        div { style: styles::panel(&theme),
            div { style: "margin-bottom: 1rem;",
                label { style: styles::field_label(), "System Prompt" }
                textarea {
                    style: styles::prompt_textarea(),
                    value: prompt,
                    placeholder: "e.g., You are a helpful support assistant",
                    oninput: move |e| {
                        prompt.set(e.value());
                    },
                }
            }

            div { style: "margin-bottom: 1rem;",
                label { style: styles::field_label(), "Endpoint URL" }
                input {
                    style: styles::text_input(),
                    value: endpoint_url,
                    placeholder: "e.g., https://api.example.com/v1/chat",
                    oninput: move |e| {
                        endpoint_url.set(e.value());
                    },
                }
            }

            div { style: "display: flex; justify-content: flex-end;",
                button {
                    style: styles::submit_button(&theme, enabled),
                    disabled: !enabled,
                    onclick: apply,
                    "Apply"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_while_either_field_is_empty() {
        assert!(!submit_enabled("", ""));
        assert!(!submit_enabled("prompt", ""));
        assert!(!submit_enabled("", "https://example.com"));
    }

    #[test]
    fn enabled_once_both_fields_are_filled() {
        assert!(submit_enabled("prompt", "https://example.com"));
    }

    #[test]
    fn whitespace_only_counts_as_filled() {
        assert!(submit_enabled("   ", " "));
    }
}
