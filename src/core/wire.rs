use serde::{Deserialize, Deserializer};

/// Yahoo's `{ "raw": 1.23, "fmt": "1.23" }` number wrapper.
///
/// Missing values arrive as `{}` and decode to `raw: None`. Ratios with a
/// zero denominator arrive as `"Infinity"`; those decode to `f64::INFINITY`,
/// and `"NaN"` stays `f64::NAN`.
#[derive(Deserialize, Clone, Copy, Debug, Default)]
pub struct RawNum {
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub(crate) raw: Option<f64>,
}

fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrText {
        Num(f64),
        Text(String),
    }

    match Option::<NumOrText>::deserialize(deserializer)? {
        Some(NumOrText::Num(v)) => Ok(Some(v)),
        Some(NumOrText::Text(s)) => match s.as_str() {
            "Infinity" => Ok(Some(f64::INFINITY)),
            "-Infinity" => Ok(Some(f64::NEG_INFINITY)),
            "NaN" => Ok(Some(f64::NAN)),
            "" => Ok(None),
            other => other
                .parse::<f64>()
                .map(Some)
                .map_err(|_| serde::de::Error::custom(format!("not a number: {other}"))),
        },
        None => Ok(None),
    }
}

pub fn from_raw(raw: Option<RawNum>) -> Option<f64> {
    raw.and_then(|n| n.raw)
}

#[derive(Deserialize, Clone, Copy, Debug)]
pub struct RawDate {
    pub(crate) raw: Option<i64>,
}

pub fn from_raw_date(r: Option<RawDate>) -> Option<i64> {
    r.and_then(|d| d.raw)
}

/// Whole-number values (volumes, market cap) sometimes come back as floats.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn from_raw_u64(r: Option<RawNum>) -> Option<u64> {
    from_raw(r)
        .filter(|v| v.is_finite() && *v >= 0.0 && *v <= u64::MAX as f64)
        .map(|v| v.round() as u64)
}
