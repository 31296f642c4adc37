//! Welcome page shown at the root route.

use dioxus::prelude::*;

use crate::app_settings::AppSettings;
use crate::theme::Theme;
use crate::ui::styles;

#[component]
pub fn Home() -> Element {
    let settings = consume_context::<Signal<AppSettings>>();
    let theme = Theme::from_settings(&settings.read());

    rsx! {
        div { class: "welcome-banner", style: styles::banner(&theme),
            h1 { style: "margin: 0 0 0.5rem 0;", "Welcome to Botpanel" }
            p { style: "margin: 0 0 1.5rem 0; color: #666;",
                "Configure your assistant's prompt, appearance, and contact details."
            }
            Link { to: "/settings", "Open Settings" }
        }
    }
}
