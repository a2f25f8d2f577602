use std::sync::LazyLock;

use regex::Regex;

/// `<digits>[.<digits>]<unit>` with unit C/c/F/f. No whitespace, no sign.
static RE_TEMPERATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)([CcFf])$").unwrap());

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Parse a temperature string into degrees Fahrenheit.
/// Handles: "37C", "37.5c", "98.6F", "101f"
pub fn parse_temperature_fahrenheit(text: &str) -> Option<f64> {
    let caps = RE_TEMPERATURE.captures(text)?;
    let value = caps.get(1)?.as_str().parse::<f64>().ok()?;
    match caps.get(2)?.as_str() {
        "C" | "c" => Some(celsius_to_fahrenheit(value)),
        _ => Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_body_temperature() {
        assert!((celsius_to_fahrenheit(37.0) - 98.6).abs() < 1e-9);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    }

    #[test]
    fn parses_both_units_and_cases() {
        assert_eq!(parse_temperature_fahrenheit("101f"), Some(101.0));
        assert_eq!(parse_temperature_fahrenheit("98.6F"), Some(98.6));
        assert_eq!(parse_temperature_fahrenheit("100C"), Some(212.0));
        assert_eq!(parse_temperature_fahrenheit("0c"), Some(32.0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "F", "37", "37K", "37.F", ".5C", "37CF", " 37C", "37C ", "-1C"] {
            assert_eq!(parse_temperature_fahrenheit(bad), None, "parsed {bad:?}");
        }
    }
}
