//! Helpdesk login - form validation and settings menu logic
//!
//! Validation, gated submission and navigation triggers behind the login
//! screen of the helpdesk mobile client, plus the settings menu descriptors.
//! Rendering, transport and navigation mechanics belong to the callers.

pub mod auth;
pub mod config;
pub mod login;
pub mod navigation;
pub mod settings;
pub mod state;
