//! Terminal output utilities.

use colored::Colorize;

/// Width of the label column in key/value output.
pub const LABEL_WIDTH: usize = 20;

/// `label: value` with the label padded to [`LABEL_WIDTH`].
pub fn label_row<T: ToString>(label: &str, value: T) -> String {
    let label = format!("{label}:");
    format!("{:<width$} {}", label.bold(), value.to_string(), width = LABEL_WIDTH)
}

/// Right-align each value in its column, separated by two spaces.
pub fn table_row(values: &[String], widths: &[usize]) -> String {
    values
        .iter()
        .zip(widths)
        .map(|(value, &width)| format!("{value:>width$}"))
        .collect::<Vec<String>>()
        .join("  ")
}
