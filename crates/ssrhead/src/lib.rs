//! Top-level facade crate for ssrhead.
//!
//! Re-exports the head renderer and the server library so users can depend on a single crate.

pub mod core {
    pub use ssrhead_core::*;
}

pub mod server {
    pub use ssrhead_server::*;
}
