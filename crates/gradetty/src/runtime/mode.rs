//! `AppMode`-specific key handling modules.

pub(crate) mod confirmation;
pub(crate) mod help;
pub(crate) mod list;
pub(crate) mod login;
pub(crate) mod report;
pub(crate) mod url_prompt;
