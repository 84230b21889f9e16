//! # API Route Modules
//!
//! Route modules for the verification portal gateway:
//!
//! - `verify` — forwards document text to the Dholakpur verification
//!   endpoint and relays the proof envelope.
//! - `related_docs` — concurrent fan-out over a list of VC ids, returning
//!   the documents that could be fetched and dropping the ones that failed.
//! - `credential_details` — fetches one credential document, relaying the
//!   upstream status on failure.
//!
//! Every route is a single-shot proxy: validate, make at most one batch of
//! upstream calls, relay. No state survives the request.

pub mod credential_details;
pub mod related_docs;
pub mod verify;

/// Trait for request validation at the HTTP boundary.
///
/// Validates field-level constraints before any upstream call is dispatched.
/// The error string is the exact client-facing message, returned verbatim
/// in the 400 body.
pub(crate) trait Validate {
    fn validate(&self) -> Result<(), String>;
}
