//! Roster data model for the school site.
//!
//! This crate provides the two documents the site consumes:
//! - [`SiteInfo`]: display strings from `config.json`
//! - [`Roster`]: the grade → group → student tree from `data.json`
//!
//! Both documents are produced by an external generation step and are
//! read-only from the consumer's perspective. Student counts are always
//! derived from the `students` sequences, never stored redundantly.

pub(crate) mod roster;

pub use roster::{Grade, Group, ModelError, Roster, SiteInfo};
