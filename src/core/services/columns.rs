//! Column resolver - finds semantic fields in the header row
//!
//! For every field the aliases are tried in order, and for every alias the
//! header cells are scanned left to right. The first cell that contains the
//! alias, or is contained in it (case-insensitively), wins.

use log::debug;

use crate::core::models::{AliasTable, ColumnMap, Field};

/// Whether a header cell matches an alias
///
/// Either string may be a case-insensitive substring of the other. Blank
/// cells and blank aliases never match.
#[must_use]
pub fn header_matches(header: &str, alias: &str) -> bool {
    let header = header.trim().to_lowercase();
    let alias = alias.trim().to_lowercase();
    if header.is_empty() || alias.is_empty() {
        return false;
    }
    header.contains(&alias) || alias.contains(&header)
}

/// Resolve every field against a header row
#[must_use]
pub fn resolve_columns(header: &[String], aliases: &AliasTable) -> ColumnMap {
    let mut columns = ColumnMap::unresolved();

    for field in Field::ALL {
        let found = aliases
            .aliases(field)
            .find_map(|alias| header.iter().position(|cell| header_matches(cell, alias)));

        match found {
            Some(index) => {
                debug!("column {field} -> #{index} \"{}\"", header[index]);
                columns.insert(field, index, header[index].as_str());
            },
            None => debug!("column {field} not found in header"),
        }
    }

    columns
}
