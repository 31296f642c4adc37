// Copyright © 2025 Nipun Kumar

use dioxus::{logger::tracing::warn, prelude::*};

use crate::app_settings::PhoneValue;
use crate::country::{self, COUNTRIES, DEFAULT_COUNTRY};
use crate::ui::styles;

/// Resolves the country pair forwarded alongside the phone string.
/// Unknown or missing countries forward empty strings, never nothing.
pub fn forwarded_country(iso: Option<&str>) -> (String, String) {
    match iso.and_then(country::lookup) {
        Some(c) => (c.iso.to_ascii_uppercase(), c.name.to_string()),
        None => (String::new(), String::new()),
    }
}

/// Country-aware phone number input.
///
/// Keeps a local echo of the phone string for display and forwards the
/// full `PhoneValue` to the caller on every change, with the country
/// code upper-cased. Phone format is not checked here.
#[component]
pub fn PhoneInput(value: Option<String>, on_change: Callback<PhoneValue, ()>) -> Element {
    let mut phone = use_signal(|| value.clone().unwrap_or_default());
    let mut selected_iso = use_signal(|| Some(DEFAULT_COUNTRY.to_string()));

    let emit = move |phone_val: String, iso: Option<String>| {
        let (country_code, country_name) = forwarded_country(iso.as_deref());
        if iso.is_some() && country_code.is_empty() {
            warn!("unknown country code selected: {iso:?}");
        }
        on_change(PhoneValue {
            phone: phone_val,
            country_code,
            country_name,
        });
    };

    let handle_phone = move |e: Event<FormData>| {
        phone.set(e.value());
        emit(e.value(), selected_iso());
    };
    let handle_country = move |iso: Option<String>| {
        selected_iso.set(iso.clone());
        emit(phone.cloned(), iso);
    };

    rsx! {
        div { style: "display: flex; flex-direction: row; gap: 0.5rem; align-items: flex-start;",
            CountrySelect { value: selected_iso(), on_select: handle_country }
            input {
                style: styles::text_input(),
                r#type: "tel",
                value: phone,
                placeholder: "e.g., 98765 43210",
                oninput: handle_phone,
            }
        }
    }
}

#[component]
fn CountrySelect(value: Option<String>, on_select: Callback<Option<String>, ()>) -> Element {
    let selected_none_class = if value.is_none() { "selected" } else { "" };
    rsx! {
        div { class: "box-select",
            div {
                class: "option {selected_none_class}",
                onclick: move |_e| { on_select(None) },
                "-- No Country --"
            }
            {
                COUNTRIES
                    .iter()
                    .map(move |c| {
                        let selected = value
                            .as_deref()
                            .is_some_and(|v| v.eq_ignore_ascii_case(c.iso));
                        let selected_class = if selected { "selected" } else { "" };
                        rsx! {
                            div {
                                class: "option {selected_class}",
                                onclick: move |_e| { on_select(Some(c.iso.to_string())) },
                                "{c.name} (+{c.dial})"
                            }
                        }
                    })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_country_is_upper_cased() {
        let (code, name) = forwarded_country(Some("in"));
        assert_eq!(code, "IN");
        assert_eq!(name, "India");
    }

    #[test]
    fn mixed_case_input_still_resolves() {
        let (code, name) = forwarded_country(Some("Gb"));
        assert_eq!(code, "GB");
        assert_eq!(name, "United Kingdom");
    }

    #[test]
    fn missing_country_forwards_empty_strings() {
        assert_eq!(forwarded_country(None), (String::new(), String::new()));
    }

    #[test]
    fn unknown_country_forwards_empty_strings() {
        assert_eq!(forwarded_country(Some("zz")), (String::new(), String::new()));
    }
}
