//! # base16-sync
//!
//! Git mirroring of scheme and template sources, the scheme × template build,
//! and hash-gated artifact writes.
//!
//! Call [`pipeline::run`] with a [`BuildOptions`](base16_core::BuildOptions)
//! to update mirrors and/or build; the returned [`RunReport`] carries the
//! nested result.

pub mod catalog;
pub mod error;
pub mod git;
pub mod hash_store;
pub mod mirror;
pub mod pipeline;
pub mod writer;

pub use catalog::{Catalog, Family, Palettes, Selection, Session, SourceKind, Templates};
pub use error::SyncError;
pub use git::Git;
pub use mirror::{GitRepo, MirrorAction, MirrorReport};
pub use pipeline::RunReport;
pub use writer::{write_result, WriteResult};
