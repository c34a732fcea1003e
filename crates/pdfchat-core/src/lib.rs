//! Session controller for the PDF chat client.
//!
//! `session` holds the reducer, `runtime` executes its effects through the
//! port traits in `ports`.

pub mod cancel;
pub mod event_bus;
pub mod keys;
pub mod ports;
pub mod runtime;
pub mod session;
