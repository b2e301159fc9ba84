use serde::{Deserialize, Serialize};

/// Rates applied on top of the nightly price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    pub tax_rate: f64,
    pub service_fee: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.12,
            service_fee: 25.0,
        }
    }
}

/// The price panel shown during the flow. Recomputed on every change, never
/// stored; the submitted booking carries `total` and must match what the
/// panel displayed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub taxes: f64,
    pub fees: f64,
    pub total: f64,
}

/// `subtotal = base * nights`, `taxes = subtotal * rate`, flat service fee.
/// A non-positive night count prices as an empty stay.
pub fn quote(base_price: f64, nights: i64, config: &PricingConfig) -> PriceBreakdown {
    let nights = nights.max(0) as f64;
    let subtotal = base_price * nights;
    let taxes = subtotal * config.tax_rate;
    let fees = config.service_fee;
    PriceBreakdown {
        subtotal,
        taxes,
        fees,
        total: subtotal + taxes + fees,
    }
}
