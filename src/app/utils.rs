use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};

/// Best-effort numeric parse for user input. Anything that is not a finite
/// number, including empty text, is treated as zero.
pub fn parse_lenient(field: &str) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Formats an amount as whole Colombian pesos, e.g. `$ 154.700`. Overflowed
/// figures (infinite or NaN) are shown as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let (negative, digits) = match Decimal::from_f64(amount) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            (
                rounded.is_sign_negative() && !rounded.is_zero(),
                rounded.abs().trunc().to_string(),
            )
        }
        // Outside the decimal range
        None => (
            amount.is_sign_negative(),
            format!("{:.0}", amount.abs()),
        ),
    };

    let sign = if negative { "-" } else { "" };
    format!("{}$ {}", sign, group_thousands(&digits))
}

/// Formats a ratio as a percentage with two decimals, e.g. `0.025` -> `2.50%`.
pub fn format_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped
}
