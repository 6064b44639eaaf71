//
//  gogs-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! This module renders results of the `gogs` CLI in one of two formats:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: Machine-readable JSON output for scripting and automation
//!
//! ## Architecture
//!
//! - [`table`]: Table formatting utilities using `comfy_table`
//! - [`json`]: JSON serialization utilities using `serde_json`
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: Enum representing the available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for values printed as a detail view
//! - [`TableRow`]: Trait for values printed as rows of a list
//!
//! ## Example
//!
//! ```rust,ignore
//! use gogs_client::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write(&user)?;
//! writer.write_list(&repos)?;
//! writer.write_success("Deleted repository demo/hello");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// Output format for CLI results.
///
/// | Format | Flag | Use Case |
/// |--------|------|----------|
/// | `Table` | (default) | Interactive terminal use |
/// | `Json` | `--json` | Scripting, piping to `jq` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl OutputFormat {
    /// Selects the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes values and status messages in the selected [`OutputFormat`].
///
/// Color is detected once at construction through `console`.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a single value as pretty JSON or as its detail view.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes a list as a JSON array or as one table.
    ///
    /// In table format an empty list prints `empty_message` instead.
    pub fn write_list<T: Serialize + TableRow>(
        &self,
        values: &[T],
        empty_message: &str,
    ) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&values)?,
            OutputFormat::Table if values.is_empty() => println!("{}", empty_message),
            OutputFormat::Table => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers().iter().copied())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
            }
        }
        Ok(())
    }

    /// Reports a completed action: a `{"success": true, ...}` object in JSON
    /// format, a check-marked line otherwise.
    pub fn write_done(&self, msg: &str, fields: serde_json::Value) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&success_object(fields))?,
            OutputFormat::Table => self.write_success(msg),
        }
        Ok(())
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// A value with a human-readable detail view.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl TableOutput for User {
///     fn print_table(&self, color: bool) {
///         print_header(&self.username);
///         print_field("Email", &self.email, color);
///     }
/// }
/// ```
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

/// A value rendered as one row of a list table.
pub trait TableRow {
    /// Column headers, in row order.
    fn headers() -> &'static [&'static str];

    fn row(&self, color: bool) -> Vec<String>;
}

/// Prints a bold header followed by an underline of the same width.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(console::measure_text_width(text)));
}

/// Prints a `key: value` line, dimming the key when color is enabled.
///
/// Empty values are shown as `-`.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    let value = if value.is_empty() { "-" } else { value };
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
