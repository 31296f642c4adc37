//! Per-component style builders.
//!
//! Each function is a named bundle of visual rules for one piece of
//! markup, parameterized only by the theme and simple flags. Everything
//! here is a pure function; conditional styling is a ternary on the
//! flag, evaluated per render.

use crate::theme::Theme;

// ── Shared form styling ────────────────────────────────────

pub fn panel(theme: &Theme) -> String {
    format!(
        "
        border: 1px solid #ddd;
        border-radius: 6px;
        padding: 1rem;
        margin-bottom: 1rem;
        background: #f9f9f9;
        font-family: {};
        ",
        theme.font_family
    )
}

pub fn field_label() -> &'static str {
    "display: block; margin-bottom: 0.25rem; font-weight: bold;"
}

pub fn text_input() -> &'static str {
    "
    width: 100%;
    padding: 0.5rem;
    border: 1px solid #ddd;
    border-radius: 3px;
    box-sizing: border-box;
    "
}

pub fn prompt_textarea() -> &'static str {
    "
    width: 100%;
    min-height: 6em;
    padding: 0.5rem;
    border: 1px solid #ddd;
    border-radius: 3px;
    box-sizing: border-box;
    resize: vertical;
    "
}

pub fn submit_button(theme: &Theme, enabled: bool) -> String {
    let state = if enabled {
        "opacity: 1; cursor: pointer;"
    } else {
        "opacity: 0.5; cursor: not-allowed;"
    };
    format!(
        "
        background: {};
        color: white;
        border: none;
        padding: 0.5rem 1rem;
        border-radius: 4px;
        transition: opacity 0.15s ease;
        {state}
        ",
        theme.accent
    )
}

// ── Color swatch ───────────────────────────────────────────

pub fn swatch(value: &str, selected: bool) -> String {
    let emphasis = if selected {
        "border: 3px solid #fff; box-shadow: 0 0 0 2px rgba(0,0,0,.35), 0 0 10px rgba(0,0,0,.25); transform: scale(1.1);"
    } else {
        "border: 2px solid #d0d0d0; box-shadow: none; transform: scale(1);"
    };
    format!(
        "
        position: relative;
        width: 36px;
        height: 36px;
        border-radius: 50%;
        cursor: pointer;
        transition: transform 0.15s ease, box-shadow 0.15s ease;
        background: {value};
        {emphasis}
        "
    )
}

pub fn swatch_caption() -> &'static str {
    "font-size: 0.8rem; color: #666;"
}

// ── Agent dialog ───────────────────────────────────────────

pub fn dialog_overlay(open: bool) -> String {
    let visibility = if open {
        "visibility: visible; opacity: 1;"
    } else {
        "visibility: hidden; opacity: 0;"
    };
    format!(
        "
        position: fixed;
        inset: 0;
        background: rgba(0,0,0,.5);
        display: flex;
        align-items: center;
        justify-content: center;
        transition: opacity 0.3s ease;
        {visibility}
        "
    )
}

pub fn dialog_panel(theme: &Theme, open: bool) -> String {
    let transform = if open {
        "transform: translateY(0);"
    } else {
        "transform: translateY(16px);"
    };
    format!(
        "
        width: 420px;
        max-width: 90%;
        background: #fff;
        border-radius: 6px;
        box-shadow: 0 4px 18px rgba(0,0,0,.3);
        font-family: {};
        {transform}
        transition: transform 0.3s ease;
        ",
        theme.font_family
    )
}

pub fn dialog_header(theme: &Theme) -> String {
    format!(
        "
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.75rem 1rem;
        border-radius: 6px 6px 0 0;
        background: {};
        color: white;
        ",
        theme.accent
    )
}

pub fn dialog_bubble(theme: &Theme, from_agent: bool) -> String {
    let side = if from_agent {
        "align-self: flex-start; background: #f0f0f0; color: #222;".to_string()
    } else {
        format!("align-self: flex-end; background: {}; color: white;", theme.accent)
    };
    format!(
        "
        padding: 0.5rem 0.75rem;
        border-radius: 10px;
        max-width: 80%;
        {side}
        "
    )
}

pub fn dialog_close() -> &'static str {
    "
    background: none;
    border: none;
    font-size: 1.2rem;
    cursor: pointer;
    padding: 0.25rem;
    color: white;
    "
}

// ── Welcome banner ─────────────────────────────────────────

pub fn banner(theme: &Theme) -> String {
    format!(
        "
        margin: 4rem auto;
        max-width: 540px;
        padding: 2rem;
        border-radius: 8px;
        border-top: 4px solid {};
        box-shadow: 0 2px 12px rgba(0,0,0,.12);
        text-align: center;
        font-family: {};
        ",
        theme.accent, theme.font_family
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_reflects_supplied_value() {
        let s = swatch("#ff0000", true);
        assert!(s.contains("background: #ff0000;"));
    }

    #[test]
    fn swatch_emphasis_follows_selection_flag() {
        let on = swatch("#ff0000", true);
        let off = swatch("#ff0000", false);
        assert_ne!(on, off);
        assert!(on.contains("scale(1.1)"));
        assert!(off.contains("scale(1)"));
        // Pure function of its inputs: same call, same output.
        assert_eq!(on, swatch("#ff0000", true));
    }

    #[test]
    fn submit_button_follows_enabled_flag() {
        let theme = Theme::default();
        let enabled = submit_button(&theme, true);
        let disabled = submit_button(&theme, false);
        assert!(enabled.contains("cursor: pointer"));
        assert!(disabled.contains("not-allowed"));
        assert!(enabled.contains(&theme.accent));
    }

    #[test]
    fn dialog_visibility_follows_open_flag() {
        assert!(dialog_overlay(true).contains("visibility: visible"));
        assert!(dialog_overlay(false).contains("visibility: hidden"));
    }
}
