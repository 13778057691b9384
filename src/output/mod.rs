//! Output formatting for calculation results.
//!
//! This module handles rendering for the CLI:
//! - [`report`] - text or JSON for reports, splits, allocations, failures and errors
//! - [`terminal`] - aligned label and table rows

mod report;
mod terminal;

pub use report::{
    render_allocation, render_error, render_failure, render_mask_info, render_report,
    render_subnets,
};
pub use terminal::{label_row, table_row};
