//! The compatibility report shown after an implementation is chosen

use super::table::{TableColumn, TableStep, TableStepParams};
use crate::config::ReportConfig;

/// Order of the report table in the wizard
pub const REPORT_ORDER: u32 = 2;

const LOADING: &str = "Loading...";

/// Metric rows; `None` marks a section heading
const METRICS: &[(&str, Option<[&str; 5]>)] = &[
    ("GitHub:", None),
    ("License", Some(["MIT", "MIT", "0%", "0%", "✅"])),
    ("Number Of Stars", Some([LOADING; 5])),
    ("Number Of Issues Open", Some([LOADING; 5])),
    ("Number Of Issues Closed", Some([LOADING; 5])),
    ("Number Of Pull Requests Open", Some([LOADING; 5])),
    ("Number Of Pull Requests Closed", Some([LOADING; 5])),
    ("Number Of Forks", Some([LOADING; 5])),
    ("Last Commit Date", Some([LOADING; 5])),
    ("Number Of Contributors", Some([LOADING; 5])),
    ("GraphQL Compatibility Keywords:", None),
    ("Number Of Comments Open", Some([LOADING; 5])),
    ("Number Of Comments Closed", Some([LOADING; 5])),
    ("GraphQL:", None),
    ("Specification Version", Some([LOADING; 5])),
];

/// Build the report table comparing `spec_header` against `impl_header`
pub fn compat_table(config: &ReportConfig, spec_header: &str, impl_header: &str) -> TableStep {
    let value = config.value_width;
    let columns = vec![
        TableColumn::new("Metric", config.metric_width),
        TableColumn::new(spec_header, value),
        TableColumn::new(impl_header, value),
        TableColumn::new("Diff Ratio", value),
        TableColumn::new("Max Diff", value),
        TableColumn::new("Result", value),
    ];

    let rows = METRICS
        .iter()
        .map(|(metric, cells)| {
            let mut row = vec![metric.to_string()];
            match cells {
                Some(cells) => row.extend(cells.iter().map(|c| c.to_string())),
                None => row.extend(std::iter::repeat(String::new()).take(5)),
            }
            row
        })
        .collect();

    TableStep::new(TableStepParams {
        order: REPORT_ORDER,
        header: String::new(),
        columns,
        rows,
    })
}
