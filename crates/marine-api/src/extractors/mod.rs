//! Axum extractors for request handling
//!
//! Custom extractors for caller identification and body validation.

mod caller;
mod validated;

pub use caller::{
    client_address, credentials, forwarded_for, peer_address, Caller, API_KEY_HEADER,
    FORWARDED_FOR_HEADER,
};
pub use validated::{JsonBody, ValidatedJson};
