//! Canonical number text shared by attribute values and path data

/// Plain decimal form: shortest text that parses back to the same `f64`,
/// never in exponent notation. Negative zero prints as `0`.
pub fn decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Shortest exact form for path operands.
///
/// Uses exponent notation only when it is strictly shorter than the plain
/// decimal, so `8.11624501e-16` keeps its exponent while `0.5` and `100`
/// stay as written.
pub fn shortest(value: f64) -> String {
    let plain = decimal(value);
    if value == 0.0 {
        return plain;
    }
    let exponent = format!("{:e}", value);
    if exponent.len() < plain.len() {
        exponent
    } else {
        plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_drops_trailing_zeros() {
        assert_eq!(decimal(20.0), "20");
        assert_eq!(decimal(4.50), "4.5");
        assert_eq!(decimal(-0.75), "-0.75");
    }

    #[test]
    fn test_decimal_negative_zero() {
        assert_eq!(decimal(-0.0), "0");
    }

    #[test]
    fn test_shortest_keeps_high_precision_exponent() {
        assert_eq!(shortest(8.11624501e-16), "8.11624501e-16");
        assert_eq!(shortest(-8.11624501e-16), "-8.11624501e-16");
        assert_eq!(
            shortest(8.11624501e-16).parse::<f64>().unwrap(),
            8.11624501e-16
        );
    }

    #[test]
    fn test_shortest_prefers_plain_on_tie() {
        assert_eq!(shortest(100.0), "100");
        assert_eq!(shortest(0.5), "0.5");
        assert_eq!(shortest(1000.0), "1e3");
    }

    #[test]
    fn test_shortest_round_trips() {
        for value in [3.51, 16.49, 1.0 / 3.0, 12345.678, 1e-7, -2.5e10] {
            assert_eq!(shortest(value).parse::<f64>().unwrap(), value);
        }
    }
}
