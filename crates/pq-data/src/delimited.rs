//! Header-indexed delimited text tables (tab or comma separated)

use std::path::Path;

use crate::error::LoadError;

/// A parsed table: header names plus raw rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedTable {
    headers: Vec<String>,
    /// File line number (1-based) and fields of each data row
    rows: Vec<(usize, Vec<String>)>,
}

impl DelimitedTable {
    /// Parse table text. The first non-empty line is the header.
    pub fn parse(contents: &str, delimiter: char) -> Self {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
            .filter(|(_, line)| !line.trim().is_empty());

        let headers = lines
            .next()
            .map(|(_, line)| split_fields(line.trim_start_matches('\u{feff}'), delimiter))
            .unwrap_or_default();
        let rows = lines
            .map(|(number, line)| (number, split_fields(line, delimiter)))
            .collect();

        Self { headers, rows }
    }

    /// Index of a header column, or `MissingColumn`
    pub fn column(&self, path: &Path, name: &'static str) -> Result<usize, LoadError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(|(line, fields)| Row {
            line: *line,
            fields,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One data row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// 1-based line number in the source file
    pub line: usize,
    fields: &'a [String],
}

impl<'a> Row<'a> {
    /// Field at `index`, empty when the row is short
    pub fn get(&self, index: usize) -> &'a str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Split one line, honouring double-quoted fields
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            c if c == delimiter && !quoted => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            c => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}
