//! Full-screen UI page modules.

pub mod account;
pub mod analysis_list;
pub mod analyzing;
pub mod login;
pub mod report;
pub mod support;
pub mod url_prompt;
