//! Infrastructure adapters for the grading backend, storage, and process
//! environment.

pub mod api;
/// Signed-in session persistence on disk.
pub mod auth_store;
pub mod clipboard;
pub mod db;
pub mod lock;
pub mod logging;
