#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use crate::{
        app::calc::evaluate,
        models::{DisplayRow, LineItem, LineItemId, Margin, MarginMode, WithholdingClass},
        test::{assert_close, line_item},
    };

    #[test]
    fn modes_parse_from_labels() {
        assert_eq!(MarginMode::from_str("Percent").unwrap(), MarginMode::Percent);
        assert_eq!(MarginMode::from_str("porcentaje").unwrap(), MarginMode::Percent);
        assert_eq!(MarginMode::from_str("FIXED").unwrap(), MarginMode::Fixed);
        assert_eq!(MarginMode::from_str("fijo").unwrap(), MarginMode::Fixed);
        assert!(MarginMode::from_str("both").is_err());

        assert_eq!(
            WithholdingClass::from_str("venta").unwrap(),
            WithholdingClass::Sale
        );
        assert_eq!(
            WithholdingClass::from_str("Servicio").unwrap(),
            WithholdingClass::Service
        );
        assert_eq!(
            WithholdingClass::from_str("service").unwrap(),
            WithholdingClass::Service
        );
        assert!(WithholdingClass::from_str("rent").is_err());
    }

    #[test]
    fn only_two_withholding_rates_exist() {
        let rates: Vec<f64> = WithholdingClass::iter().map(|c| c.rate()).collect();
        assert_eq!(rates, vec![0.025, 0.04]);
    }

    #[test]
    fn toggling_flips_variants() {
        assert_eq!(MarginMode::Percent.toggled(), MarginMode::Fixed);
        assert_eq!(MarginMode::Fixed.toggled(), MarginMode::Percent);
        assert_eq!(WithholdingClass::Sale.toggled(), WithholdingClass::Service);
        assert_eq!(WithholdingClass::Service.toggled(), WithholdingClass::Sale);
    }

    #[test]
    fn blank_row_defaults() {
        let row = LineItem::blank(LineItemId::new(7));

        assert!(row.is_blank());
        assert_eq!(*row.margin_mode(), MarginMode::Percent);
        assert_eq!(*row.withholding_class(), WithholdingClass::Sale);
        assert_eq!(row.id().value(), 7);
    }

    #[test]
    fn margin_resolves_both_views() {
        let (amount, ratio) = Margin::Percent(0.3).resolve(119000.0);
        assert_close(amount, 35700.0);
        assert_close(ratio, 0.3);

        let (amount, ratio) = Margin::Fixed(59500.0).resolve(119000.0);
        assert_close(amount, 59500.0);
        assert_close(ratio, 0.5);

        assert_eq!(Margin::Fixed(100.0).resolve(0.0), (100.0, 0.0));
    }

    #[test]
    fn counterpart_shows_the_other_mode() {
        let percent = evaluate(&line_item(
            1,
            "100000",
            MarginMode::Percent,
            "30",
            WithholdingClass::Sale,
        ));
        match percent.margin_counterpart() {
            Margin::Fixed(amount) => assert_close(amount, 35700.0),
            other => panic!("unexpected counterpart {:?}", other),
        }

        let fixed = evaluate(&line_item(
            2,
            "100000",
            MarginMode::Fixed,
            "59500",
            WithholdingClass::Sale,
        ));
        match fixed.margin_counterpart() {
            Margin::Percent(ratio) => assert_close(ratio, 0.5),
            other => panic!("unexpected counterpart {:?}", other),
        }
    }

    #[test]
    fn display_row_formats_every_field() {
        let metrics = evaluate(&line_item(
            3,
            "100000",
            MarginMode::Percent,
            "30",
            WithholdingClass::Sale,
        ));
        let row = DisplayRow::from(&metrics);

        assert_eq!(*row.id(), LineItemId::new(3));
        assert_eq!(row.base(), "$ 100.000");
        assert_eq!(row.vat(), "$ 19.000");
        assert_eq!(row.cost_with_vat(), "$ 119.000");
        assert_eq!(row.margin(), "30.00%");
        assert_eq!(row.margin_counterpart(), "$ 35.700");
        assert_eq!(row.withholding_class(), "Sale");
        assert_eq!(row.sale_price(), "$ 154.700");
        assert_eq!(row.withholding_rate(), "2.50%");
        assert_eq!(row.withholding_amount(), "$ 3.868");
        assert_eq!(row.net_receivable(), "$ 150.833");
    }

    #[test]
    fn display_row_hides_overflowed_figures() {
        let huge = format!("1{}", "0".repeat(308));
        let metrics = evaluate(&line_item(
            4,
            &huge,
            MarginMode::Percent,
            "1000",
            WithholdingClass::Sale,
        ));
        assert!(metrics.sale_price().is_infinite());
        assert!(metrics.net_receivable().is_nan());

        let row = DisplayRow::from(&metrics);
        assert_eq!(row.sale_price(), "$ 0");
        assert_eq!(row.withholding_amount(), "$ 0");
        assert_eq!(row.net_receivable(), "$ 0");
    }

    #[test]
    fn labels_serialize_in_snake_case() {
        assert_eq!(
            serde_json::to_value(MarginMode::Fixed).unwrap(),
            serde_json::json!("fixed")
        );
        assert_eq!(
            serde_json::to_value(WithholdingClass::Service).unwrap(),
            serde_json::json!("service")
        );

        let class: WithholdingClass = serde_json::from_str("\"sale\"").unwrap();
        assert_eq!(class, WithholdingClass::Sale);
    }
}
