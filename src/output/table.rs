//
//  gogs-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Utilities for tabular terminal output built on `comfy_table`.
//!
//! ## Example
//!
//! ```rust
//! use gogs_client::output::TableBuilder;
//!
//! let rendered = TableBuilder::new()
//!     .color(false)
//!     .headers(["ID", "Name"])
//!     .row(["1", "hello"])
//!     .render();
//! assert!(rendered.contains("hello"));
//! ```

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a table with the UTF-8 preset and dynamic width.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for list tables.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection. Call before [`headers`](Self::headers).
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.into());
                if self.color {
                    cell.fg(Color::Cyan)
                } else {
                    cell
                }
            })
            .collect();
        self.table.set_header(cells);
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table
            .add_row(cells.into_iter().map(Into::into).collect::<Vec<String>>());
        self
    }

    pub fn rows<I, R, S>(self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, |builder, row| builder.row(row))
    }

    pub fn render(self) -> String {
        self.table.to_string()
    }

    pub fn print(self) {
        println!("{}", self.render());
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a boolean as `Yes` / `No`.
pub fn format_bool(value: bool, color: bool) -> String {
    use console::style;
    match (value, color) {
        (true, true) => style("Yes").green().to_string(),
        (false, true) => style("No").dim().to_string(),
        (true, false) => "Yes".to_string(),
        (false, false) => "No".to_string(),
    }
}

/// Formats a repository visibility.
pub fn format_visibility(private: bool, color: bool) -> String {
    use console::style;
    match (private, color) {
        (true, true) => style("private").yellow().to_string(),
        (false, true) => style("public").green().to_string(),
        (true, false) => "private".to_string(),
        (false, false) => "public".to_string(),
    }
}

/// Formats an optional timestamp as `YYYY-MM-DD HH:MM`, or `-`.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Truncates to at most `max_len` characters, ending with `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let mut cut: String = s.chars().take(max_len - 3).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("hello", 2), "he");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_bool(true, false), "Yes");
        assert_eq!(format_visibility(true, false), "private");
        assert_eq!(format_date(None), "-");

        let dt: DateTime<Utc> = "2016-03-09T11:20:44Z".parse().unwrap();
        assert_eq!(format_date(Some(&dt)), "2016-03-09 11:20");
    }

    #[test]
    fn test_render_contains_rows() {
        let rendered = TableBuilder::new()
            .color(false)
            .headers(["ID", "NAME"])
            .rows(vec![vec!["1", "alpha"], vec!["2", "beta"]])
            .render();
        assert!(rendered.contains("NAME"));
        assert!(rendered.contains("alpha"));
        assert!(rendered.contains("beta"));
    }
}
