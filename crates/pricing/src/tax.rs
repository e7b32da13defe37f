//! Regional tax table (state code → rate).

/// Region preselected by a fresh session.
pub const DEFAULT_REGION: &str = "SP";

/// Tax rate per state, sorted by code.
pub const TAX_RATES: &[(&str, f64)] = &[
    ("AC", 0.17),
    ("AL", 0.18),
    ("AM", 0.18),
    ("AP", 0.18),
    ("BA", 0.18),
    ("CE", 0.18),
    ("DF", 0.18),
    ("ES", 0.17),
    ("GO", 0.17),
    ("MA", 0.18),
    ("MG", 0.18),
    ("MS", 0.17),
    ("MT", 0.17),
    ("PA", 0.17),
    ("PB", 0.18),
    ("PE", 0.18),
    ("PI", 0.18),
    ("PR", 0.19),
    ("RJ", 0.20),
    ("RN", 0.18),
    ("RO", 0.175),
    ("RR", 0.17),
    ("RS", 0.17),
    ("SC", 0.12),
    ("SE", 0.18),
    ("SP", 0.18),
    ("TO", 0.18),
];

/// Rate for `region`, or `0.0` when the code is unknown.
///
/// Lookup is exact: `"sp"` is not `"SP"`.
pub fn rate_of(region: &str) -> f64 {
    TAX_RATES
        .binary_search_by(|(code, _)| (*code).cmp(region))
        .ok()
        .and_then(|idx| TAX_RATES.get(idx))
        .map_or(0.0, |(_, rate)| *rate)
}

pub fn is_known_region(region: &str) -> bool {
    TAX_RATES.iter().any(|(code, _)| *code == region)
}

/// All region codes in table order.
pub fn regions() -> impl Iterator<Item = &'static str> {
    TAX_RATES.iter().map(|(code, _)| *code)
}
