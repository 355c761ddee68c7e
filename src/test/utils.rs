#[cfg(test)]
mod tests {
    use crate::app::utils::{format_currency, format_percent, parse_lenient};

    #[test]
    fn parse_lenient_reads_numbers() {
        assert_eq!(parse_lenient("100000"), 100000.0);
        assert_eq!(parse_lenient(" 30 "), 30.0);
        assert_eq!(parse_lenient("-5"), -5.0);
        assert_eq!(parse_lenient("0.25"), 0.25);
        assert_eq!(parse_lenient("1e3"), 1000.0);
    }

    #[test]
    fn parse_lenient_falls_back_to_zero() {
        for field in ["", "   ", "abc", "12abc", "1,5", "NaN", "inf", "-infinity", "1e400"] {
            assert_eq!(parse_lenient(field), 0.0, "field {:?}", field);
        }
    }

    #[test]
    fn currency_is_whole_pesos_with_grouping() {
        assert_eq!(format_currency(0.0), "$ 0");
        assert_eq!(format_currency(100.0), "$ 100");
        assert_eq!(format_currency(154700.0), "$ 154.700");
        assert_eq!(format_currency(1234567.0), "$ 1.234.567");
        assert_eq!(format_currency(999.4), "$ 999");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(3867.5), "$ 3.868");
        assert_eq!(format_currency(150832.5), "$ 150.833");
        assert_eq!(format_currency(-2.5), "-$ 3");
    }

    #[test]
    fn currency_negative_sign() {
        assert_eq!(format_currency(-2000.0), "-$ 2.000");
        assert_eq!(format_currency(-0.4), "$ 0");
    }

    #[test]
    fn currency_shows_overflowed_amounts_as_zero() {
        assert_eq!(format_currency(f64::INFINITY), "$ 0");
        assert_eq!(format_currency(f64::NEG_INFINITY), "$ 0");
        assert_eq!(format_currency(f64::NAN), "$ 0");
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(format_percent(0.025), "2.50%");
        assert_eq!(format_percent(0.04), "4.00%");
        assert_eq!(format_percent(0.3), "30.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(50000.0 / 119000.0), "42.02%");
    }
}
