use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;

use super::{LineItemId, LineItemMetrics, Margin, PortfolioTotals};
use crate::app::utils::{format_currency, format_percent};

#[derive(Clone, Debug, Getters, Serialize)]
pub struct DisplayRow {
    id: LineItemId,
    base: String,
    vat: String,
    cost_with_vat: String,
    margin: String,
    margin_counterpart: String,
    withholding_class: String,
    sale_price: String,
    withholding_rate: String,
    withholding_amount: String,
    net_receivable: String,
}

fn format_margin(margin: &Margin) -> String {
    match margin {
        Margin::Percent(ratio) => format_percent(*ratio),
        Margin::Fixed(amount) => format_currency(*amount),
    }
}

impl From<&LineItemMetrics> for DisplayRow {
    fn from(metrics: &LineItemMetrics) -> Self {
        Self {
            id: *metrics.id(),
            base: format_currency(*metrics.base()),
            vat: format_currency(*metrics.vat()),
            cost_with_vat: format_currency(*metrics.cost_with_vat()),
            margin: format_margin(metrics.margin()),
            margin_counterpart: format_margin(&metrics.margin_counterpart()),
            withholding_class: metrics.withholding_class().to_string(),
            sale_price: format_currency(*metrics.sale_price()),
            withholding_rate: format_percent(*metrics.withholding_rate()),
            withholding_amount: format_currency(*metrics.withholding_amount()),
            net_receivable: format_currency(*metrics.net_receivable()),
        }
    }
}

#[derive(Clone, Debug, Getters, Serialize)]
pub struct DisplayTotals {
    base: String,
    vat: String,
    cost_with_vat: String,
    margin_amount: String,
    sale_price: String,
    withholding_amount: String,
    net_receivable: String,
}

impl From<&PortfolioTotals> for DisplayTotals {
    fn from(totals: &PortfolioTotals) -> Self {
        Self {
            base: format_currency(*totals.base()),
            vat: format_currency(*totals.vat()),
            cost_with_vat: format_currency(*totals.cost_with_vat()),
            margin_amount: format_currency(*totals.margin_amount()),
            sale_price: format_currency(*totals.sale_price()),
            withholding_amount: format_currency(*totals.withholding_amount()),
            net_receivable: format_currency(*totals.net_receivable()),
        }
    }
}

#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct SummaryDisplay {
    items: Vec<DisplayRow>,
    totals: DisplayTotals,
}

/// Exported document describing one evaluation of the collection.
#[derive(Clone, Debug, Getters, Serialize, new)]
pub struct Summary {
    generated_at: DateTime<Local>,
    items: Vec<LineItemMetrics>,
    totals: PortfolioTotals,
    display: SummaryDisplay,
}
