//! Durable storage for regatta registrations.
//!
//! The canonical collection is one JSON document holding an ordered array of
//! entries. Appends are serialized behind a write lock and committed by
//! atomically replacing the document, so readers always observe a complete
//! snapshot (pre-append or post-append, never a truncated file).

mod error;
mod store;
mod types;

pub use error::StoreError;
pub use store::RegistrationStore;
pub use types::*;
