//! Sheet decoding and record ingestion.
//!
//! A published sheet arrives as CSV text; `sheet` decodes it into raw rows
//! and `ingestor` assembles those rows into a fresh content model. One
//! ingestion pass is atomic: it either produces a complete model or the
//! caller keeps the previous one.

pub mod ingestor;
pub mod sheet;

pub use ingestor::{ingest, IngestMode, CATEGORY_ALIASES, ITEM_ALIASES, LEAF_ROOT_FIELD};
pub use sheet::{parse_sheet, read_sheet};
