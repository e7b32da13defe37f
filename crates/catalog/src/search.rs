//! Search-box lookup over the catalog.

use crate::motor::Motor;

/// Filter `motors` by a free-text term.
///
/// The term is uppercased once. Codes are matched as stored, models are
/// uppercased before matching. An empty term matches nothing.
pub fn search<'a>(motors: &'a [Motor], term: &str) -> Vec<&'a Motor> {
    if term.is_empty() {
        return Vec::new();
    }
    let term = term.to_uppercase();
    motors
        .iter()
        .filter(|m| m.code.as_str().contains(&term) || m.model.to_uppercase().contains(&term))
        .collect()
}
