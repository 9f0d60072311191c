// src/domain/search.rs
use serde::Deserialize;

/// Optional filters accepted by the property search.
///
/// Prices are in major currency units; the query compares them against
/// `cost_per_night` after conversion to minor units. A zero bound, a zero
/// rating, or an empty city is treated the same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
    pub city: Option<String>,
    pub minimum_price_per_night: Option<f64>,
    pub maximum_price_per_night: Option<f64>,
    pub minimum_rating: Option<f64>,
}

impl SearchCriteria {
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// Both bounds in minor units, or `None` unless both are present.
    pub fn price_range_minor_units(&self) -> Option<(i64, i64)> {
        let min = present(self.minimum_price_per_night)?;
        let max = present(self.maximum_price_per_night)?;
        Some((to_minor_units(min), to_minor_units(max)))
    }

    pub fn minimum_rating(&self) -> Option<f64> {
        present(self.minimum_rating)
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// 49.99 -> 4999
pub fn to_minor_units(major: f64) -> i64 {
    (major * 100.0).round() as i64
}
