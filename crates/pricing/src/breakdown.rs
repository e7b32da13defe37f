use serde::{Deserialize, Serialize};

use motordesk_catalog::Motor;

use crate::tax::rate_of;

/// Sale price of one motor in one region.
///
/// Values are kept unrounded; currency formatting is a presentation concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: f64,
    pub rate: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Compute the breakdown of `motor` sold into `region`.
///
/// Unknown regions are taxed at zero, so this never fails.
pub fn compute_breakdown(motor: &Motor, region: &str) -> PriceBreakdown {
    let base = motor.base_price;
    let rate = rate_of(region);
    let tax_amount = base * rate;
    PriceBreakdown {
        base,
        rate,
        tax_amount,
        total: base + tax_amount,
    }
}

/// Render a rate as a percentage with one decimal (`0.175` → `"17.5%"`).
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
