//! ssrhead server library entry.
//!
//! This crate wires config, application state, and the page endpoints into an
//! axum router that serves the server-rendered document shell. It is intended
//! to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod page;
pub mod router;
