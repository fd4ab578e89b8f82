use serde::{Deserialize, Deserializer};

/// Coerce a number to a usable value: anything non-finite becomes 0.
pub fn to_num(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
}

/// Deserialize an `f64` that may have been stored as a number, a numeric
/// string, or `null` (serde_json writes non-finite floats as `null`).
///
/// Anything that cannot be read as a number comes back as NaN, which the
/// valuation code treats as 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let loose = Option::<Loose>::deserialize(deserializer)?;
    Ok(match loose {
        Some(Loose::Number(n)) => n,
        Some(Loose::Text(s)) => s.trim().parse().unwrap_or(f64::NAN),
        None => f64::NAN,
    })
}

/// Serde default for a number field absent from a stored record.
pub fn missing_number() -> f64 {
    f64::NAN
}
