//! Locating a single trader row in an HTML results table.

use scraper::{ElementRef, Html, Selector};

use crate::types::LookupKey;
use crate::xpath::normalize_space;

/// Column layout of a results table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSchema {
    /// Value of the table's `id` attribute.
    pub table_id: &'static str,
    /// Column names in document order.
    pub columns: &'static [&'static str],
}

impl TableSchema {
    /// The company search results table.
    pub const COMPANY_LIST: TableSchema = TableSchema {
        table_id: "companyList",
        columns: &["code", "name", "address", "sector", "medNumber", "tin"],
    };

    /// Number of cells a well-formed row has.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// 1-based index of the column holding the identifier for `key`.
    pub fn column_for(&self, key: LookupKey) -> Option<usize> {
        let name = match key {
            LookupKey::MedNumber => "medNumber",
            LookupKey::CNumber => "code",
        };
        self.columns
            .iter()
            .position(|c| *c == name)
            .map(|idx| idx + 1)
    }
}

/// Finds the row of `schema`'s table whose `column`-th cell (1-based) reads
/// `value` once whitespace is normalized, and returns that row's cell texts,
/// trimmed, in document order.
///
/// Returns `None` when the table is missing, when no row matches, when more
/// than one row matches, or when the matching row does not have exactly
/// `schema.width()` cells. Duplicate identifiers are treated as not found
/// rather than picking one arbitrarily.
///
/// The document is walked directly rather than through an XPath engine; the
/// equivalent expression, for callers that have one, is
/// [`row_cells_expr`](crate::xpath::row_cells_expr).
pub fn find_row(
    document: &Html,
    schema: &TableSchema,
    column: usize,
    value: &str,
) -> Option<Vec<String>> {
    if column == 0 {
        return None;
    }

    let table_selector = Selector::parse("table").ok()?;
    let row_selector = Selector::parse("tr").ok()?;

    let table = document
        .select(&table_selector)
        .find(|t| t.value().id() == Some(schema.table_id))?;

    let mut matches = table.select(&row_selector).filter_map(|row| {
        let cells = row_cells(row);
        let key_cell = cells.get(column - 1)?;
        (normalize_space(&cell_text(*key_cell)) == value).then_some(cells)
    });

    let cells = matches.next()?;
    if matches.next().is_some() {
        tracing::debug!("Ambiguous match for {} in table {}", value, schema.table_id);
        return None;
    }
    if cells.len() != schema.width() {
        tracing::debug!(
            "Matched row has {} cells, expected {}",
            cells.len(),
            schema.width()
        );
        return None;
    }

    Some(cells.into_iter().map(|c| cell_text(c).trim().to_string()).collect())
}

fn row_cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "td")
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>()
}
