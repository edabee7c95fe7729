//! UI-owned state types referenced by [`crate::ui::state::app_mode::AppMode`].

pub mod app_mode;
pub mod help_action;
pub mod login;
pub mod report;
