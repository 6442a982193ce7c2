#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use tabled::{
    Table,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{batch::StudentResult, stats::ClassStats};

/// Renders per-student results as a table.
pub fn results_table(results: &[StudentResult]) -> String {
    Table::new(results)
        .with(Panel::header("Final Grades"))
        .with(Panel::footer(format!("{} students", results.len())))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}

/// Renders class statistics as a one-row table, with the approval rate in
/// the footer.
pub fn stats_table(stats: &ClassStats) -> String {
    let footer = if stats.has_data() {
        format!("Approval rate: {:.2}%", stats.approval_rate())
    } else {
        "No valid grades".to_string()
    };

    Table::new([stats])
        .with(Panel::header("Class Statistics"))
        .with(Panel::footer(footer))
        .with(
            Modify::new(Rows::first())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(
            Modify::new(Rows::last())
                .with(Alignment::center())
                .with(Alignment::center_vertical()),
        )
        .with(Style::modern())
        .to_string()
}
