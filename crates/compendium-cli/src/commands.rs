//! Command implementations, separated from terminal output so they stay
//! testable.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use compendium_ingest::{ingest, read_sheet, IngestMode};
use compendium_model::ContentModel;
use compendium_transform::{condense, enrich, resolve, search, SearchHit};

use crate::cli::{LookupArgs, SearchArgs, SheetArgs};

/// Result of one ingestion pass.
pub struct SheetOutcome {
    pub model: ContentModel,
}

/// Ingest a sheet, optionally exporting the model as JSON.
pub fn run_sheet(args: &SheetArgs) -> Result<SheetOutcome> {
    let model = load_model(args.sheet.as_path(), args.mode.into())?;

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&model).context("serialize model")?;
        fs::write(path, json).with_context(|| format!("write model: {}", path.display()))?;
        info!(path = %path.display(), "model exported");
    }

    Ok(SheetOutcome { model })
}

/// Resolve one field of one item and render it for display.
///
/// `None` means the item, field, or basis has nothing to display; that is a
/// normal outcome, not an error.
pub fn run_lookup(args: &LookupArgs) -> Result<Option<String>> {
    let model = load_model(args.sheet.as_path(), args.mode.into())?;

    let Some((_, _, fields)) = model
        .iter_items()
        .find(|(_, item, _)| *item == args.item)
    else {
        return Ok(None);
    };
    let Some(value) = fields.get(&args.field) else {
        return Ok(None);
    };
    let Some(resolved) = resolve(value, args.basis) else {
        return Ok(None);
    };

    let rendered = if args.detailed {
        enrich(&resolved, !args.raw_citations)
    } else {
        condense(&resolved)
    };
    Ok(Some(rendered))
}

/// Search resolved content across the model.
pub fn run_search(args: &SearchArgs) -> Result<Vec<SearchHit>> {
    let model = load_model(args.sheet.as_path(), args.mode.into())?;
    Ok(search(
        &model,
        &args.term,
        args.basis,
        args.category.as_deref(),
    ))
}

fn load_model(sheet: &std::path::Path, mode: IngestMode) -> Result<ContentModel> {
    let rows = read_sheet(sheet)?;
    info!(rows = rows.len(), ?mode, "ingesting sheet");
    let model = ingest(&rows, mode);
    info!(
        categories = model.category_count(),
        items = model.item_count(),
        "model built"
    );
    Ok(model)
}
