use dioxus::prelude::*;

use crate::app_settings::EmailSettings;
use crate::theme::Theme;
use crate::ui::styles;

/// Email notification form.
///
/// Drafts are seeded from the caller's current value; pressing save hands
/// the trimmed result back through `on_save`. An empty address bails out
/// rather than saving.
#[component]
pub fn EmailConfig(
    theme: Theme,
    value: EmailSettings,
    on_save: Callback<EmailSettings, ()>,
) -> Element {
    let mut address = use_signal(|| value.address.clone());
    let mut display_name = use_signal(|| value.display_name.clone());

    let handle_save = move |_e: Event<MouseData>| {
        let address_val = address().trim().to_string();
        if address_val.is_empty() {
            return;
        }
        on_save(EmailSettings {
            address: address_val,
            display_name: display_name().trim().to_string(),
        });
    };

    let enabled = !address().trim().is_empty();

    rsx! {
        div { style: styles::panel(&theme),
            div { style: "margin-bottom: 1rem;",
                label { style: styles::field_label(), "Notification Email" }
                input {
                    style: styles::text_input(),
                    r#type: "email",
                    value: address,
                    placeholder: "e.g., alerts@example.com",
                    oninput: move |e| {
                        address.set(e.value());
                    },
                }
            }

            div { style: "margin-bottom: 1rem;",
                label { style: styles::field_label(), "Sender Name" }
                input {
                    style: styles::text_input(),
                    value: display_name,
                    placeholder: "e.g., Support Bot",
                    oninput: move |e| {
                        display_name.set(e.value());
                    },
                }
            }

            div { style: "display: flex; justify-content: flex-end;",
                button {
                    style: styles::submit_button(&theme, enabled),
                    disabled: !enabled,
                    onclick: handle_save,
                    "Save"
                }
            }
        }
    }
}
