//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build columns from headers, sizing each to its widest cell.
    pub fn auto(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let width = rows
                    .iter()
                    .map(|r| r.get(i).map(|c| c.chars().count()).unwrap_or(0))
                    .max()
                    .unwrap_or(0)
                    .max(h.chars().count());
                Column {
                    header: h.to_string(),
                    width,
                }
            })
            .collect();

        Self { columns, rows }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$}  ", col.header, width = col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push_str("  ");
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", row[i], width = col.width));
            }
            out.push('\n');
        }

        out
    }
}
