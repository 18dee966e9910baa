//! # Record Store
//!
//! The persistent player collection and its error taxonomy.

pub mod collection;
pub mod errors;

pub use collection::{PlayerStore, SortDirection};
pub use errors::{StorageError, StorageResult};
