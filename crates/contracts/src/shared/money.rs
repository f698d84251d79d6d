//! Money amounts are `f64` in major units everywhere in the contracts.
//!
//! The backend is not consistent: the same price may arrive as `10.5` or as
//! `"10.50"`. The serde helpers here accept both and always write a number.

use serde::{Deserialize, Deserializer};

/// Parses user or wire input: surrounding whitespace and `,` thousands
/// separators are ignored. Non-finite values are rejected.
pub fn parse_money(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Two decimals with `,` thousands separators: `1234567.891` -> `1,234,567.89`.
pub fn format_money(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Rounds to cents, used before comparing or summing amounts.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn into_amount<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            RawAmount::Number(n) => Ok(n),
            RawAmount::Text(s) => {
                parse_money(&s).ok_or_else(|| E::custom(format!("invalid amount: {s:?}")))
            }
        }
    }
}

/// `#[serde(deserialize_with = "deserialize_money")]`
pub fn deserialize_money<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?.into_amount()
}

/// Optional variant: `null` and blank strings become `None`.
pub fn deserialize_money_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawAmount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawAmount::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(raw) => raw.into_amount().map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Priced {
        #[serde(deserialize_with = "deserialize_money")]
        price: f64,
        #[serde(default, deserialize_with = "deserialize_money_opt")]
        discount: Option<f64>,
    }

    #[test]
    fn test_accepts_number_or_string() {
        let a: Priced = serde_json::from_str(r#"{"price": 10.5}"#).unwrap();
        let b: Priced = serde_json::from_str(r#"{"price": "10.50", "discount": "1.25"}"#).unwrap();
        assert_eq!(a.price, 10.5);
        assert_eq!(a.discount, None);
        assert_eq!(b.price, 10.5);
        assert_eq!(b.discount, Some(1.25));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "ten"}"#).is_err());
        let blank: Priced = serde_json::from_str(r#"{"price": 1, "discount": " "}"#).unwrap();
        assert_eq!(blank.discount, None);
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money(" 1,234.50 "), Some(1234.5));
        assert_eq!(parse_money("7"), Some(7.0));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("inf"), None);
        assert_eq!(parse_money("12abc"), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(999.999), "1,000.00");
        assert_eq!(format_money(1234567.891), "1,234,567.89");
        assert_eq!(format_money(-1234.5), "-1,234.50");
        assert_eq!(format_money(-0.001), "0.00");
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(2.675 * 2.0), 5.35);
    }
}
