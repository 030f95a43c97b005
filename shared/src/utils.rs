// Presentation helpers shared by the engine and the GUI.

/// Rounds to two decimals, folding `-0.00` into `0.00`.
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_change_percent(value: f64) -> String {
    format!("{:.2}%", round_to_cents(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(1234.5678), 1234.57);
        assert_eq!(round_to_cents(-1.234), -1.23);
        assert_eq!(round_to_cents(-0.001).to_string(), "0");
    }

    #[test]
    fn test_format_change_percent() {
        assert_eq!(format_change_percent(1.5), "1.50%");
        assert_eq!(format_change_percent(-0.004), "0.00%");
        assert_eq!(format_change_percent(-1.999), "-2.00%");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(100.0), "100.00");
        assert_eq!(format_price(3099.999), "3100.00");
    }
}
