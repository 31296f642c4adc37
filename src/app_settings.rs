use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_ACCENT;

/// Everything the settings screen can configure.
///
/// The app shell owns one of these behind a `Signal<AppSettings>` context;
/// leaf components only receive values out of it and report proposed
/// changes back up through callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub prompt: String,
    pub endpoint_url: String,
    pub accent_color: String,
    pub email: EmailSettings,
    pub phone: PhoneValue,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            prompt: String::new(),
            endpoint_url: String::new(),
            accent_color: DEFAULT_ACCENT.to_string(),
            email: EmailSettings::default(),
            phone: PhoneValue::default(),
        }
    }
}

impl AppSettings {
    /// A prompt/endpoint pair is considered configured once both strings
    /// are non-empty. Whitespace-only strings count as filled.
    pub fn is_configured(&self) -> bool {
        !self.prompt.is_empty() && !self.endpoint_url.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailSettings {
    pub address: String,
    pub display_name: String,
}

/// Phone number plus the country pair derived alongside it. The country
/// fields are always present; "no country" is the empty string, never a
/// missing field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneValue {
    pub phone: String,
    pub country_code: String,
    pub country_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_not_configured() {
        let s = AppSettings::default();
        assert!(!s.is_configured());
        assert_eq!(s.accent_color, DEFAULT_ACCENT);
    }

    #[test]
    fn whitespace_counts_as_configured() {
        let s = AppSettings {
            prompt: " ".to_string(),
            endpoint_url: "\t".to_string(),
            ..Default::default()
        };
        assert!(s.is_configured());
    }

    #[test]
    fn one_empty_field_is_not_configured() {
        let s = AppSettings {
            prompt: "You are a helpful assistant.".to_string(),
            endpoint_url: String::new(),
            ..Default::default()
        };
        assert!(!s.is_configured());
    }

    #[test]
    fn phone_value_serializes_with_country_fields() {
        let json = serde_json::to_string(&PhoneValue::default()).unwrap();
        assert!(json.contains("\"country_code\":\"\""));
        assert!(json.contains("\"country_name\":\"\""));
    }
}
