use crate::{
    app::utils::parse_lenient,
    models::{Evaluation, LineItem, LineItemMetrics, Margin, MarginMode, PortfolioTotals},
};

/// Value-added tax applied to every base amount.
pub const VAT_RATE: f64 = 0.19;
/// Withholding on sales of goods.
pub const SALE_WITHHOLDING_RATE: f64 = 0.025;
/// Withholding on services.
pub const SERVICE_WITHHOLDING_RATE: f64 = 0.04;

/// Derives every monetary figure of a single line item. Malformed amounts
/// count as zero, so this never fails.
pub fn evaluate(item: &LineItem) -> LineItemMetrics {
    let base = parse_lenient(item.base_amount());
    let vat = base * VAT_RATE;
    let cost_with_vat = base + vat;

    let margin_value = parse_lenient(item.margin_value());
    let margin = match item.margin_mode() {
        MarginMode::Percent => Margin::Percent(margin_value / 100.0),
        MarginMode::Fixed => Margin::Fixed(margin_value),
    };
    let (margin_amount, margin_ratio) = margin.resolve(cost_with_vat);

    // Withholding is taken from the final sale price, not the base.
    let sale_price = cost_with_vat + margin_amount;
    let withholding_rate = item.withholding_class().rate();
    let withholding_amount = sale_price * withholding_rate;
    let net_receivable = sale_price - withholding_amount;

    LineItemMetrics::new(
        *item.id(),
        *item.withholding_class(),
        margin,
        base,
        vat,
        cost_with_vat,
        margin_amount,
        margin_ratio,
        sale_price,
        withholding_rate,
        withholding_amount,
        net_receivable,
    )
}

/// Evaluates every item in order and sums the results. An empty slice
/// yields all-zero totals.
pub fn aggregate(items: &[LineItem]) -> Evaluation {
    let metrics: Vec<LineItemMetrics> = items.iter().map(evaluate).collect();

    let totals = metrics
        .iter()
        .fold(PortfolioTotals::default(), |totals, item| {
            totals.accumulate(item)
        });

    Evaluation::new(metrics, totals)
}
