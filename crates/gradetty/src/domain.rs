//! Core types independent of terminal, network, and storage concerns.

pub mod analysis;
pub mod input;
/// Repository layout reconstruction from flat path lists.
pub mod tree;
