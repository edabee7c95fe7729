//! Reusable UI component modules.

pub mod confirmation_overlay;
pub mod file_tree;
pub mod footer_bar;
pub mod help_overlay;
pub mod qr_panel;
pub mod score_gauge;
pub mod status_bar;
pub mod tab;
pub mod text_input;
