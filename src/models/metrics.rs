use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use super::{LineItemId, WithholdingClass};

/// Margin as entered, either a ratio of cost-with-VAT or an absolute amount.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Margin {
    Percent(f64),
    Fixed(f64),
}

impl Margin {
    /// Returns `(amount, ratio)` for a given cost-with-VAT.
    pub fn resolve(&self, cost_with_vat: f64) -> (f64, f64) {
        match *self {
            Margin::Percent(ratio) => (cost_with_vat * ratio, ratio),
            Margin::Fixed(amount) => {
                let ratio = if cost_with_vat > 0.0 {
                    amount / cost_with_vat
                } else {
                    0.0
                };
                (amount, ratio)
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct LineItemMetrics {
    id: LineItemId,
    withholding_class: WithholdingClass,
    margin: Margin,
    base: f64,
    vat: f64,
    cost_with_vat: f64,
    margin_amount: f64,
    margin_ratio: f64,
    sale_price: f64,
    withholding_rate: f64,
    withholding_amount: f64,
    net_receivable: f64,
}

impl LineItemMetrics {
    /// The margin expressed in the mode that was not entered.
    pub fn margin_counterpart(&self) -> Margin {
        match self.margin {
            Margin::Percent(_) => Margin::Fixed(self.margin_amount),
            Margin::Fixed(_) => Margin::Percent(self.margin_ratio),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Getters, PartialEq, Serialize)]
pub struct PortfolioTotals {
    base: f64,
    vat: f64,
    cost_with_vat: f64,
    margin_amount: f64,
    sale_price: f64,
    withholding_amount: f64,
    net_receivable: f64,
}

impl PortfolioTotals {
    pub fn accumulate(mut self, metrics: &LineItemMetrics) -> Self {
        self.base += metrics.base;
        self.vat += metrics.vat;
        self.cost_with_vat += metrics.cost_with_vat;
        self.margin_amount += metrics.margin_amount;
        self.sale_price += metrics.sale_price;
        self.withholding_amount += metrics.withholding_amount;
        self.net_receivable += metrics.net_receivable;
        self
    }
}

/// Per-row metrics in input order plus their totals.
#[derive(Clone, Debug, Default, Getters, PartialEq, new)]
pub struct Evaluation {
    metrics: Vec<LineItemMetrics>,
    totals: PortfolioTotals,
}
