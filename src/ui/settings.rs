// Copyright © 2025 Nipun Kumar

use dioxus::prelude::*;

use crate::{
    app_settings::{AppSettings, EmailSettings, PhoneValue},
    theme::{ACCENT_PALETTE, Theme},
    ui::{
        agent_dialog::AgentDialog,
        color_picker::ColorPicker,
        dynamic_data::DynamicData,
        email_config::EmailConfig,
        phone_input::PhoneInput,
        styles,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct SettingsProps {
    pub on_close: Option<EventHandler<()>>,
}

/// Settings configuration page.
///
/// Owns the authoritative `AppSettings` behind the context signal; every
/// form leaf below is controlled and only reports proposed changes back
/// here.
#[allow(non_snake_case)]
#[component]
pub fn Settings(props: SettingsProps) -> Element {
    let mut settings_ctx = consume_context::<Signal<AppSettings>>();
    let settings = settings_ctx.read().clone();
    let theme = Theme::from_settings(&settings);
    let mut preview_open = use_signal(|| false);

    let apply_prompt = move |(prompt, endpoint_url): (String, String)| {
        let current = settings_ctx.read().clone();
        settings_ctx.set(AppSettings {
            prompt,
            endpoint_url,
            ..current
        });
    };
    let set_accent = move |color: String| {
        let current = settings_ctx.read().clone();
        settings_ctx.set(AppSettings {
            accent_color: color,
            ..current
        });
    };
    let save_email = move |email: EmailSettings| {
        let current = settings_ctx.read().clone();
        settings_ctx.set(AppSettings { email, ..current });
    };
    let save_phone = move |phone: PhoneValue| {
        let current = settings_ctx.read().clone();
        settings_ctx.set(AppSettings { phone, ..current });
    };

    rsx! {
        div {
            style: "padding: 1rem; max-width: 640px; margin: 0 auto; height: 100%; overflow-y: auto;",

            div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
                h3 { style: "margin: 0;", "Settings" }
                if let Some(on_close) = props.on_close {
                    button {
                        style: "
                            background: none;
                            border: none;
                            font-size: 1.2rem;
                            cursor: pointer;
                            padding: 0.25rem;
                            color: #666;
                        ",
                        onclick: move |_| {
                            on_close.call(());
                        },
                        "×"
                    }
                }
            }

            hr { style: "margin-bottom: 1rem;" }

            h4 { style: "margin: 0 0 1rem 0;", "Prompt & Endpoint" }
            DynamicData { theme: theme.clone(), on_apply: apply_prompt }
            p { style: "color: #666; font-size: 0.85rem;",
                if settings.is_configured() {
                    "Prompt and endpoint are set."
                } else {
                    "Prompt and endpoint are not set yet."
                }
            }

            hr { style: "margin: 2rem 0 1rem 0;" }

            h4 { style: "margin: 0 0 1rem 0;", "Appearance" }
            div { style: "display: flex; gap: 0.75rem; align-items: flex-start; flex-wrap: wrap;",
                for color in ACCENT_PALETTE.iter() {
                    ColorPicker {
                        key: "{color}",
                        value: color.to_string(),
                        is_selected: settings.accent_color == *color,
                        on_change: set_accent,
                    }
                }
                ColorPicker {
                    value: settings.accent_color.clone(),
                    is_selected: !ACCENT_PALETTE.contains(&settings.accent_color.as_str()),
                    on_change: set_accent,
                    label: Some("Custom".to_string()),
                }
            }
            div { style: "margin-top: 1rem;",
                button {
                    style: styles::submit_button(&theme, true),
                    onclick: move |_| {
                        preview_open.set(true);
                    },
                    "Preview agent dialog"
                }
            }

            hr { style: "margin: 2rem 0 1rem 0;" }

            h4 { style: "margin: 0 0 1rem 0;", "Email Notifications" }
            EmailConfig {
                theme: theme.clone(),
                value: settings.email.clone(),
                on_save: save_email,
            }

            hr { style: "margin: 2rem 0 1rem 0;" }

            h4 { style: "margin: 0 0 1rem 0;", "Contact Phone" }
            PhoneInput {
                value: Some(settings.phone.phone.clone()),
                on_change: save_phone,
            }
            if !settings.phone.country_code.is_empty() {
                p { style: "color: #666; font-size: 0.85rem;",
                    "Country: {settings.phone.country_name} ({settings.phone.country_code})"
                }
            }

            AgentDialog {
                theme: theme.clone(),
                title: "Agent Preview".to_string(),
                open: preview_open(),
                on_close: move |_| {
                    preview_open.set(false);
                },
                div { style: "display: flex; flex-direction: column; gap: 0.5rem;",
                    div { style: styles::dialog_bubble(&theme, true),
                        "Hello! How can I help you today?"
                    }
                    div { style: styles::dialog_bubble(&theme, false),
                        "Show me my latest invoice."
                    }
                }
            }
        }
    }
}
