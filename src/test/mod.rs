mod models;
mod utils;

use crate::models::{LineItem, LineItemId, MarginMode, WithholdingClass};

pub fn assert_close(actual: f64, expected: f64) {
    let scale = actual.abs().max(expected.abs()).max(1.0);
    assert!(
        (actual - expected).abs() <= 1e-9 * scale,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub fn line_item(
    id: u64,
    base: &str,
    margin_mode: MarginMode,
    margin_value: &str,
    withholding_class: WithholdingClass,
) -> LineItem {
    LineItem::new(
        LineItemId::new(id),
        base.to_string(),
        margin_mode,
        margin_value.to_string(),
        withholding_class,
    )
}
