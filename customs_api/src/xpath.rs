//! XPath string helpers: literal quoting, `normalize-space`, and the row
//! expression used to locate a trader in the company search table.

/// Quotes `value` so it can be spliced into an XPath expression as a string
/// literal.
///
/// XPath 1.0 has no escape sequence inside literals, so a value containing
/// both quote characters is rebuilt with `concat()`, inserting `'"'` wherever
/// the original had a double quote.
pub fn escape_literal(value: &str) -> String {
    if !value.contains('"') {
        return format!("\"{}\"", value);
    }
    if !value.contains('\'') {
        return format!("'{}'", value);
    }

    let mut parts = Vec::new();
    for (i, piece) in value.split('"').enumerate() {
        if i > 0 {
            parts.push("'\"'".to_string());
        }
        if !piece.is_empty() {
            parts.push(format!("\"{}\"", piece));
        }
    }
    format!("concat({})", parts.join(", "))
}

/// Applies XPath `normalize-space()`: trims the value and collapses every
/// internal run of whitespace into a single space.
pub fn normalize_space(value: &str) -> String {
    value.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

/// Builds the expression selecting every cell of the row in table
/// `table_id` whose `column`-th cell (1-based) equals `value`.
pub fn row_cells_expr(table_id: &str, column: usize, value: &str) -> String {
    format!(
        "//table[@id={}]//tr[normalize-space(td[{}])={}]/td",
        escape_literal(table_id),
        column,
        escape_literal(value)
    )
}
