use dioxus::prelude::*;

use crate::theme::Theme;
use crate::ui::styles;

/// Themed dialog shell for agent conversations.
///
/// Renders a fixed overlay and a centered panel with an accent-colored
/// header. Visibility is controlled by the caller through `open`; the
/// overlay and the header button both report dismissal via `on_close`.
#[component]
pub fn AgentDialog(
    theme: Theme,
    title: String,
    open: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            style: styles::dialog_overlay(open),
            onclick: move |_| {
                on_close.call(());
            },
            div {
                style: styles::dialog_panel(&theme, open),
                onclick: move |e: Event<MouseData>| {
                    e.stop_propagation();
                },
                div { style: styles::dialog_header(&theme),
                    h3 { style: "margin: 0; font-size: 1rem;", "{title}" }
                    button {
                        style: styles::dialog_close(),
                        onclick: move |_| {
                            on_close.call(());
                        },
                        "×"
                    }
                }
                div { style: "padding: 1rem;", {children} }
            }
        }
    }
}
