//! miniblog - Local post manager
//!
//! Keeps a collection of short posts in a `.miniblog` store directory and offers
//! search, category filtering, sorting, editing and JSON export/import.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
