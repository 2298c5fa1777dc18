//! Case-insensitive substring search.

use crate::row::UiRow;
use crate::user::{UserField, UserRecord};

/// True when `term` is empty or appears, ignoring case, in any of the
/// [`UserField::SEARCHABLE`] fields of `record`.
pub fn matches(record: &UserRecord, term: &str) -> bool {
    term.is_empty() || contains_lowered(record, &term.to_lowercase())
}

/// Rows matching `term`, in collection order.
pub fn filter_rows<'a>(rows: &'a [UiRow], term: &str) -> Vec<&'a UiRow> {
    if term.is_empty() {
        return rows.iter().collect();
    }
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|row| contains_lowered(row.record(), &needle))
        .collect()
}

fn contains_lowered(record: &UserRecord, needle: &str) -> bool {
    UserField::SEARCHABLE
        .iter()
        .any(|field| record.field(*field).to_lowercase().contains(needle))
}
