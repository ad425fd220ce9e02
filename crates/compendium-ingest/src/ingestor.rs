//! Assembly of raw rows into a fresh content model.

use tracing::debug;

use compendium_classify::{classify, explain};
use compendium_model::{
    is_valid_content, Basis, ContentModel, Row, IMAGE_URL_FIELD, ORIGINAL_CATEGORY_FIELD,
};

/// Columns that may carry the category, in priority order (tall mode only).
pub const CATEGORY_ALIASES: [&str; 3] = ["Category", "Food Category", "Group"];

/// Columns that may carry the item name, in priority order.
pub const ITEM_ALIASES: [&str; 6] = [
    "Food Name",
    "Food",
    "Name",
    "Herb Name",
    "Herb",
    "English Name",
];

/// Columns that may carry an image URL, in priority order.
const IMAGE_ALIASES: [&str; 2] = ["Image URL", "Image"];

/// Identity and control columns never stored as fields, per mode.
const FLATTENED_EXCLUDED: [&str; 7] = [
    "Category",
    "Food Name",
    "Food",
    "Name",
    "Herb Name",
    "English Name",
    "Basis",
];
const TALL_EXCLUDED: [&str; 5] = ["Category", "Food Name", "Food", "Name", "Basis"];

/// Field a herb sheet's literal `Basis` column (leaf/root/bark) is remapped
/// to, so it never collides with the evidentiary basis.
pub const LEAF_ROOT_FIELD: &str = "Basis(Leaf/Root) (only for herbs)";

/// How rows map onto items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    /// One row per (item, basis); rows sharing an item merge into one
    /// per-basis mapping. Category comes from a category column.
    Tall,
    /// One row per item; every field stored under `All`. Category comes from
    /// the classifier.
    Flattened,
}

/// Build a content model from decoded rows.
///
/// Never fails: rows without a resolvable category or item name are skipped,
/// invalid cell values are never stored, and empty input produces an empty
/// model.
pub fn ingest(rows: &[Row], mode: IngestMode) -> ContentModel {
    let mut model = ContentModel::new();
    for (idx, row) in rows.iter().enumerate() {
        ingest_row(&mut model, row, mode, idx);
    }
    model
}

fn ingest_row(model: &mut ContentModel, row: &Row, mode: IngestMode, idx: usize) {
    let category = match mode {
        IngestMode::Flattened => {
            let assigned = classify(row);
            debug!(row = idx, category = %assigned, scores = %explain(row), "classified herb row");
            assigned
        }
        IngestMode::Tall => match row.first_of(&CATEGORY_ALIASES) {
            Some(value) => value.to_string(),
            None => {
                debug!(row = idx, "skipping row without category");
                return;
            }
        },
    };
    let category = category.trim();
    if category.is_empty() {
        debug!(row = idx, "skipping row with blank category");
        return;
    }

    let Some(item) = row.first_of(&ITEM_ALIASES) else {
        debug!(row = idx, "skipping row without item name");
        return;
    };
    let item = item.trim();
    if item.is_empty() {
        debug!(row = idx, "skipping row with blank item name");
        return;
    }

    model.ensure_item(category, item);
    match mode {
        IngestMode::Flattened => ingest_flattened(model, row, category, item),
        IngestMode::Tall => ingest_tall(model, row, category, item),
    }
}

fn ingest_flattened(model: &mut ContentModel, row: &Row, category: &str, item: &str) {
    let original = match row.get("Category") {
        Some(value) if storable(value.trim()) => value.trim(),
        _ => "Medicinal Herbs",
    };
    model.insert_basis_value(category, item, ORIGINAL_CATEGORY_FIELD, Basis::All, original);

    for (column, value) in row.iter() {
        if FLATTENED_EXCLUDED.contains(&column) {
            continue;
        }
        let trimmed = value.trim();
        if storable(trimmed) {
            model.insert_basis_value(category, item, column, Basis::All, trimmed);
        }
    }

    if let Some(image) = row.first_of(&IMAGE_ALIASES) {
        if storable(image.trim()) {
            model.insert_basis_value(category, item, IMAGE_URL_FIELD, Basis::All, image.trim());
        }
    }

    if let Some(leaf_root) = row.get("Basis") {
        let trimmed = leaf_root.trim();
        if storable(trimmed) {
            model.insert_basis_value(category, item, LEAF_ROOT_FIELD, Basis::All, trimmed);
        }
    }
}

fn ingest_tall(model: &mut ContentModel, row: &Row, category: &str, item: &str) {
    let basis = row_basis(row);

    for (column, value) in row.iter() {
        if TALL_EXCLUDED.contains(&column) {
            continue;
        }
        let trimmed = value.trim();
        if storable(trimmed) {
            model.insert_basis_value(category, item, column, basis, trimmed);
        }
    }

    if let Some(image) = row.first_of(&IMAGE_ALIASES) {
        if storable(image.trim()) {
            model.insert_basis_value(category, item, IMAGE_URL_FIELD, basis, image.trim());
        }
    }
}

/// The evidentiary basis a tall row's values belong to. Absent or
/// unrecognized values fall back to the merged view.
fn row_basis(row: &Row) -> Basis {
    match row.get("Basis") {
        Some(value) if !value.trim().is_empty() => value.parse().unwrap_or_else(|_| {
            debug!(value, "unrecognized basis value, storing under All");
            Basis::All
        }),
        _ => Basis::All,
    }
}

/// Storage gate: valid content, and never the literal `N/A` placeholder.
fn storable(value: &str) -> bool {
    is_valid_content(value) && value != "N/A"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs.iter().copied().collect()
    }

    #[test]
    fn tall_row_lands_under_trimmed_keys() {
        let rows = vec![row(&[
            ("Food Name", "  Apple "),
            ("Category", " Fruits "),
            ("Macros", "25g carbs"),
        ])];
        let model = ingest(&rows, IngestMode::Tall);
        assert_eq!(
            model
                .field("Fruits", "Apple", "Macros")
                .and_then(|value| value.get(Basis::All)),
            Some("25g carbs")
        );
    }

    #[test]
    fn rows_without_item_name_are_skipped_silently() {
        let rows = vec![row(&[("Category", "Fruits"), ("Macros", "25g carbs")])];
        let model = ingest(&rows, IngestMode::Tall);
        assert!(model.is_empty());
    }

    #[test]
    fn rows_without_category_are_skipped_in_tall_mode() {
        let rows = vec![row(&[("Food Name", "Apple"), ("Macros", "25g carbs")])];
        let model = ingest(&rows, IngestMode::Tall);
        assert!(model.is_empty());
    }

    #[test]
    fn tall_rows_merge_across_bases() {
        let rows = vec![
            row(&[
                ("Food Name", "Apple"),
                ("Category", "Fruits"),
                ("Basis", "Research"),
                ("Micros", "vitamin C measured"),
            ]),
            row(&[
                ("Food Name", "Apple"),
                ("Category", "Fruits"),
                ("Basis", "Book"),
                ("Micros", "traditionally cooling"),
            ]),
        ];
        let model = ingest(&rows, IngestMode::Tall);
        let micros = model.field("Fruits", "Apple", "Micros").unwrap();
        assert_eq!(micros.get(Basis::Research), Some("vitamin C measured"));
        assert_eq!(micros.get(Basis::Book), Some("traditionally cooling"));
    }

    #[test]
    fn invalid_and_na_cells_are_never_stored() {
        let rows = vec![row(&[
            ("Food Name", "Apple"),
            ("Category", "Fruits"),
            ("Macros", "N/A"),
            ("Micros", "..."),
            ("Notes", ""),
        ])];
        let model = ingest(&rows, IngestMode::Tall);
        let fields = model.item("Fruits", "Apple").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn category_alias_priority_is_fixed() {
        let rows = vec![row(&[
            ("Food Name", "Oats"),
            ("Group", "Grains"),
            ("Food Category", "Cereals"),
        ])];
        let model = ingest(&rows, IngestMode::Tall);
        assert!(model.category("Cereals").is_some());
        assert!(model.category("Grains").is_none());
    }

    #[test]
    fn empty_input_builds_empty_model() {
        let model = ingest(&[], IngestMode::Tall);
        assert!(model.is_empty());
        let model = ingest(&[], IngestMode::Flattened);
        assert!(model.is_empty());
    }
}
