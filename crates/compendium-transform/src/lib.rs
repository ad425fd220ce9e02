//! Content resolution and text normalization.
//!
//! This crate turns stored field values into display strings:
//!
//! - **extract**: pulls one basis's span out of concatenated multi-basis text
//! - **resolve**: picks the best value for a requested basis from either
//!   field-value shape
//! - **normalization**: the condense pipeline for concise display and the
//!   enrich pipeline for detailed views
//! - **search**: case-insensitive snippet search across a resolved model

pub mod extract;
pub mod normalization;
pub mod resolve;
pub mod search;

pub use extract::extract_basis_span;
pub use normalization::{condense, enrich};
pub use resolve::resolve;
pub use search::{search, SearchHit, SearchMatch};
