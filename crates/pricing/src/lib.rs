//! Pricing module: regional tax table and sale price breakdown.
//!
//! Everything here is a pure function over static data.

pub mod breakdown;
pub mod tax;

pub use breakdown::{PriceBreakdown, compute_breakdown, format_percent};
pub use tax::{DEFAULT_REGION, TAX_RATES, is_known_region, rate_of, regions};
