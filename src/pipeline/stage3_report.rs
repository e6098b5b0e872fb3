use crate::pipeline::stage2_compare::Stage2Output;
use crate::report::text::render_report_text;
use crate::report::{ComparisonRow, ReportContext};

/// Build the report context from stage 2 and render the stdout report.
pub fn run_stage3(stage2: &Stage2Output) -> String {
    let rows = stage2
        .comparisons
        .iter()
        .map(|c| ComparisonRow {
            label: c.label.clone(),
            t_statistic: c.result.statistic,
            p_value: c.result.p_value,
        })
        .collect::<Vec<_>>();

    render_report_text(&ReportContext { rows })
}
