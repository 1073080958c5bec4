//! ticks-core library.
//!
//! # Conventions
//!
//! - **Errors**: [`error::CollectionError`] for list operations; `anyhow::Result`
//!   where configuration files are read.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).

pub mod config;
pub mod error;
pub mod model;

pub use model::collection::ItemCollection;
pub use model::item::{DONE_MARKER, Item, UNDONE_MARKER};
pub use model::record::{ItemRecord, ListRecord};
