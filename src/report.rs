//! Text and JSON rendering of evaluation reports.

use crate::error::Result;
use crate::types::EvaluationReport;
use std::fmt;

const CLASS_WIDTH: usize = 10;
const COUNT_WIDTH: usize = 10;
const METRIC_WIDTH: usize = 12;
const TABLE_WIDTH: usize = CLASS_WIDTH + 2 * COUNT_WIDTH + 3 * METRIC_WIDTH;

/// Fixed-width table: one row per class in class-set order, then a macro
/// row whose count cells are left blank. Metrics use three decimals.
///
/// ```text
/// Class             GT        TP   Precision      Recall          F1
/// ------------------------------------------------------------------
/// Button             1         1       1.000       1.000       1.000
/// ------------------------------------------------------------------
/// Macro                                1.000       1.000       1.000
/// ```
impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = "-".repeat(TABLE_WIDTH);

        writeln!(
            f,
            "{:<cw$}{:>nw$}{:>nw$}{:>mw$}{:>mw$}{:>mw$}",
            "Class",
            "GT",
            "TP",
            "Precision",
            "Recall",
            "F1",
            cw = CLASS_WIDTH,
            nw = COUNT_WIDTH,
            mw = METRIC_WIDTH,
        )?;
        writeln!(f, "{}", sep)?;

        for m in &self.per_class {
            writeln!(
                f,
                "{:<cw$}{:>nw$}{:>nw$}{:>mw$.3}{:>mw$.3}{:>mw$.3}",
                m.class,
                m.ground_truths,
                m.true_positives,
                m.precision,
                m.recall,
                m.f1,
                cw = CLASS_WIDTH,
                nw = COUNT_WIDTH,
                mw = METRIC_WIDTH,
            )?;
        }

        writeln!(f, "{}", sep)?;
        writeln!(
            f,
            "{:<cw$}{:>nw$}{:>nw$}{:>mw$.3}{:>mw$.3}{:>mw$.3}",
            "Macro",
            "",
            "",
            self.macro_avg.precision,
            self.macro_avg.recall,
            self.macro_avg.f1,
            cw = CLASS_WIDTH,
            nw = COUNT_WIDTH,
            mw = METRIC_WIDTH,
        )
    }
}

/// Render a report as a fixed-width table.
pub fn render_table(report: &EvaluationReport) -> String {
    report.to_string()
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &EvaluationReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
