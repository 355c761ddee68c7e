use std::fmt::Write;

use crate::{
    app::{calc::VAT_RATE, utils::format_percent},
    models::{DisplayRow, DisplayTotals, Evaluation},
};

/// Plain-text rendering of an evaluation, one line per item followed by the
/// consolidated totals.
pub fn render_text(evaluation: &Evaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:>4}  {:>16}  {:>16}  {:>14}  {:>14}  {:>16}  {:>15}  {:>16}",
        "#", "Base", "Cost + VAT", "Margin", "Equivalent", "Sale price", "Withholding", "Net"
    );

    for metrics in evaluation.metrics() {
        let row = DisplayRow::from(metrics);
        let _ = writeln!(
            out,
            "{:>4}  {:>16}  {:>16}  {:>14}  {:>14}  {:>16}  {:>15}  {:>16}",
            row.id(),
            row.base(),
            row.cost_with_vat(),
            row.margin(),
            row.margin_counterpart(),
            row.sale_price(),
            format!("-{}", row.withholding_amount()),
            row.net_receivable(),
        );
    }

    let totals = DisplayTotals::from(evaluation.totals());
    let _ = writeln!(out);
    let _ = writeln!(out, "Base total:        {}", totals.base());
    let _ = writeln!(out, "VAT ({}):     {}", format_percent(VAT_RATE), totals.vat());
    let _ = writeln!(out, "Purchase cost:     {}", totals.cost_with_vat());
    let _ = writeln!(out, "Estimated margin:  +{}", totals.margin_amount());
    let _ = writeln!(out, "Total withholding: -{}", totals.withholding_amount());
    let _ = writeln!(out, "Net receivable:    {}", totals.net_receivable());

    out
}
