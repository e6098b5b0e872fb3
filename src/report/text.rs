use crate::report::{ReportContext, format_f64_6};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();
    for row in &ctx.rows {
        out.push_str(&format!("{}:\n", row.label));
        out.push_str(&format!("T-Statistic: {}\n", format_f64_6(row.t_statistic)));
        out.push_str(&format!("P-value: {}\n", format_f64_6(row.p_value)));
    }
    out
}
