use std::fmt;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::app::calc::{SALE_WITHHOLDING_RATE, SERVICE_WITHHOLDING_RATE};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct LineItemId(u64);

impl LineItemId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum MarginMode {
    #[default]
    #[strum(to_string = "Percent", serialize = "porcentaje", serialize = "%")]
    Percent,
    #[strum(to_string = "Fixed", serialize = "fijo", serialize = "monto")]
    Fixed,
}

impl MarginMode {
    pub fn toggled(&self) -> Self {
        match self {
            MarginMode::Percent => MarginMode::Fixed,
            MarginMode::Fixed => MarginMode::Percent,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, EnumIter, EnumString, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum WithholdingClass {
    #[default]
    #[strum(to_string = "Sale", serialize = "venta")]
    Sale,
    #[strum(to_string = "Service", serialize = "servicio")]
    Service,
}

impl WithholdingClass {
    pub fn rate(&self) -> f64 {
        match self {
            WithholdingClass::Service => SERVICE_WITHHOLDING_RATE,
            WithholdingClass::Sale => SALE_WITHHOLDING_RATE,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            WithholdingClass::Sale => WithholdingClass::Service,
            WithholdingClass::Service => WithholdingClass::Sale,
        }
    }
}

/// One row of user input. Amounts are kept exactly as typed and only
/// interpreted when the row is evaluated.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct LineItem {
    id: LineItemId,
    base_amount: String,
    margin_mode: MarginMode,
    margin_value: String,
    withholding_class: WithholdingClass,
}

impl LineItem {
    pub fn blank(id: LineItemId) -> Self {
        Self::new(
            id,
            String::new(),
            MarginMode::default(),
            String::new(),
            WithholdingClass::default(),
        )
    }

    pub fn is_blank(&self) -> bool {
        self.base_amount.is_empty()
            && self.margin_value.is_empty()
            && self.margin_mode == MarginMode::default()
            && self.withholding_class == WithholdingClass::default()
    }

    pub fn base_amount_mut(&mut self) -> &mut String {
        &mut self.base_amount
    }

    pub fn margin_value_mut(&mut self) -> &mut String {
        &mut self.margin_value
    }

    pub fn set_margin_mode(&mut self, margin_mode: MarginMode) {
        self.margin_mode = margin_mode;
    }

    pub fn set_withholding_class(&mut self, withholding_class: WithholdingClass) {
        self.withholding_class = withholding_class;
    }
}
