//! ssrhead core: head metadata model, renderer, and head collector.
//!
//! This crate turns a [`MetadataConfig`] into the ordered set of `<title>` and
//! `<meta>` descriptors a server-rendered page puts in its document head, and
//! provides the collector that merges those descriptors into one final head.
//! It carries no transport or runtime dependencies.
//!
//! Panics, `unwrap`, and `expect` are compile-denied here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod collector;
pub mod error;
pub mod metadata;
pub mod render;
pub mod tag;

/// Shared result type.
pub use error::{HeadError, Result};

pub use collector::{HeadCollector, HeadSink};
pub use metadata::{MetadataConfig, MetadataOverride};
pub use render::{render_head, render_head_html, render_into, HeadMetadataRenderer};
pub use tag::{HeadTag, MetaAttr, MetadataTagSet, TagKey};
