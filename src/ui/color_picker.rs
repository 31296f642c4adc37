use dioxus::prelude::*;

use crate::ui::styles;

/// Controlled circular color swatch.
///
/// The swatch never owns the color: `value` comes from the caller and
/// every pick is reported back through `on_change` verbatim. Selection
/// emphasis is driven entirely by `is_selected`. The optional `label`
/// renders a caption under the swatch.
#[component]
pub fn ColorPicker(
    value: String,
    is_selected: bool,
    on_change: Callback<String, ()>,
    label: Option<String>,
) -> Element {
    rsx! {
        div { style: "display: inline-flex; flex-direction: column; align-items: center; gap: 0.25rem;",
            div { style: styles::swatch(&value, is_selected),
                // Native color input stretched invisibly over the swatch;
                // clicking anywhere on the circle opens the platform picker.
                input {
                    r#type: "color",
                    style: "position: absolute; inset: 0; width: 100%; height: 100%; opacity: 0; cursor: pointer;",
                    value: "{value}",
                    oninput: move |e: Event<FormData>| {
                        on_change(e.value());
                    },
                }
            }
            if let Some(label) = label {
                span { style: styles::swatch_caption(), "{label}" }
            }
        }
    }
}
