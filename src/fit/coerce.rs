//! Numeric coercion of raw sample values.
//!
//! Coercion is a filter, never an error: anything that does not read as a
//! finite number is dropped.
//!
//! - numbers pass through (NaN and ±inf are dropped)
//! - text is trimmed and parsed as `f64` (`"12"`, `" 1.5e2 "`, `"+3"`)
//! - booleans map to `1.0` / `0.0`
//! - nulls are dropped

use crate::domain::RawValue;

/// Coerce a single raw value to a finite `f64`.
pub fn coerce(value: &RawValue) -> Option<f64> {
    let v = match value {
        RawValue::Null => return None,
        RawValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        RawValue::Int(i) => *i as f64,
        RawValue::Float(f) => *f,
        RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
    };
    v.is_finite().then_some(v)
}

/// Coerce every value, keeping input order and dropping what cannot be read.
pub fn coerce_all<I, V>(raw: I) -> Vec<f64>
where
    I: IntoIterator<Item = V>,
    V: Into<RawValue>,
{
    raw.into_iter()
        .filter_map(|v| coerce(&v.into()))
        .collect()
}
