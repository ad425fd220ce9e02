//! Terminal output for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use compendium_classify::CATEGORIES;
use compendium_model::{Basis, ContentModel, FieldValue};
use compendium_transform::SearchHit;

use crate::commands::SheetOutcome;

const BASIS_COLUMNS: [Basis; 4] = [Basis::All, Basis::Research, Basis::Book, Basis::Gen];

pub fn print_sheet_summary(outcome: &SheetOutcome) {
    let model = &outcome.model;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Items"),
        header_cell("Fields"),
        header_cell("All"),
        header_cell("Research"),
        header_cell("Book"),
        header_cell("Gen"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = CategoryTally::default();
    for category in model.category_names() {
        let tally = tally_category(model, category);
        let mut cells = vec![
            Cell::new(category).fg(Color::Green),
            Cell::new(tally.items),
            Cell::new(tally.fields),
        ];
        cells.extend(tally.by_basis.iter().map(Cell::new));
        table.add_row(cells);
        totals.absorb(&tally);
    }

    let mut total_cells = vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(totals.items).add_attribute(Attribute::Bold),
        Cell::new(totals.fields).add_attribute(Attribute::Bold),
    ];
    total_cells.extend(
        totals
            .by_basis
            .iter()
            .map(|count| Cell::new(count).add_attribute(Attribute::Bold)),
    );
    table.add_row(total_cells);

    println!("{table}");
}

pub fn print_search_hits(hits: &[SearchHit]) {
    if hits.is_empty() {
        println!("No matches.");
        return;
    }
    for hit in hits {
        println!("{} / {}", hit.category, hit.item);
        for found in &hit.matches {
            println!("  [{}] {}", found.section, found.snippet);
        }
    }
}

pub fn print_categories() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Keywords"),
        header_cell("Rating columns"),
    ]);
    apply_summary_table_style(&mut table);

    for profile in &CATEGORIES {
        let rating_columns = if profile.rating_columns.is_empty() {
            "-".to_string()
        } else {
            profile.rating_columns.join(", ")
        };
        table.add_row(vec![
            Cell::new(profile.name).fg(Color::Green),
            Cell::new(profile.keywords.join(", ")),
            Cell::new(rating_columns),
        ]);
    }

    println!("{table}");
}

#[derive(Default)]
struct CategoryTally {
    items: usize,
    fields: usize,
    by_basis: [usize; 4],
}

impl CategoryTally {
    fn absorb(&mut self, other: &CategoryTally) {
        self.items += other.items;
        self.fields += other.fields;
        for (total, count) in self.by_basis.iter_mut().zip(other.by_basis) {
            *total += count;
        }
    }
}

fn tally_category(model: &ContentModel, category: &str) -> CategoryTally {
    let mut tally = CategoryTally::default();
    let Some(items) = model.category(category) else {
        return tally;
    };
    tally.items = items.len();
    for fields in items.values() {
        tally.fields += fields.len();
        for value in fields.values() {
            match value {
                FieldValue::Text(_) => tally.by_basis[0] += 1,
                FieldValue::PerBasis(entries) => {
                    for basis in entries.keys() {
                        let index = BASIS_COLUMNS
                            .iter()
                            .position(|candidate| candidate == basis)
                            .unwrap_or(0);
                        tally.by_basis[index] += 1;
                    }
                }
            }
        }
    }
    tally
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
