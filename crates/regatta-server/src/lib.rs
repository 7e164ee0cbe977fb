//! Registration service for the Syntul Masters sprint regatta.
//!
//! Accepts public registrations, persists them through
//! [`registration_store`], and gives the operator an authenticated listing
//! and a formatted spreadsheet export.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod report;
pub mod validate;

pub use auth::AdminAuth;
pub use config::Config;
pub use error::ServerError;
