//! User interface components for botpanel.
//!
//! This module contains all the UI components that make up the settings
//! application: the welcome page, the settings page, and the form leaves
//! it composes.

mod agent_dialog;  // Themed dialog shell
mod color_picker;  // Controlled circular color swatch
mod dynamic_data;  // Prompt/endpoint configuration panel
mod email_config;  // Email notification form
pub mod home;      // Welcome page (public for routing)
mod phone_input;   // Country-aware phone number input
pub mod settings;  // Settings configuration page (public for routing)
mod styles;        // Per-component style builders
