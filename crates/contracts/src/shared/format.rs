//! Number and currency formatting for the dashboard

use serde::{Deserialize, Serialize};

/// Separators and precision used when printing amounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub thousands_separator: String,
    pub decimal_separator: String,
    pub decimals: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        }
    }
}

/// Formats a number with a thousands separator and the given number of decimals
///
/// # Examples
///
/// ```
/// use contracts::shared::format::{format_number_with_decimals, DisplaySettings};
/// let formatted = format_number_with_decimals(1234.567, 2, &DisplaySettings::default());
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, settings: &DisplaySettings) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    // Separators go every 3 digits counting from the end
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    let separator_rev: String = settings.thousands_separator.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push_str(&separator_rev);
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}{}{}", formatted_integer, settings.decimal_separator, d),
        None => formatted_integer,
    }
}

/// Amount with the configured precision
pub fn format_money(value: f64, settings: &DisplaySettings) -> String {
    format_number_with_decimals(value, settings.decimals, settings)
}

/// Amount prefixed with the currency symbol: `Q42,500.00`
pub fn format_currency(symbol: &str, value: f64, settings: &DisplaySettings) -> String {
    if value < 0.0 {
        format!("-{}{}", symbol, format_money(-value, settings))
    } else {
        format!("{}{}", symbol, format_money(value, settings))
    }
}

/// Integer with a thousands separator
pub fn format_number_int(value: f64, settings: &DisplaySettings) -> String {
    format_number_with_decimals(value, 0, settings)
}

/// Whether a driver value reads as a plain count rather than an amount
pub fn is_whole(value: f64) -> bool {
    value.fract() == 0.0
}

/// Driver values: whole numbers print as counts, anything else as money
pub fn format_driver_value(value: f64, settings: &DisplaySettings) -> String {
    if is_whole(value) {
        format_number_int(value, settings)
    } else {
        format_money(value, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whole() {
        assert!(is_whole(12.0));
        assert!(!is_whole(12.5));
        assert_eq!(format_driver_value(12.0, &DisplaySettings::default()), "12");
    }

    fn european() -> DisplaySettings {
        DisplaySettings {
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimals: 2,
        }
    }

    #[test]
    fn test_format_money() {
        let s = DisplaySettings::default();
        assert_eq!(format_money(1234.56, &s), "1,234.56");
        assert_eq!(format_money(1234567.89, &s), "1,234,567.89");
        assert_eq!(format_money(0.0, &s), "0.00");
        assert_eq!(format_money(-1234.56, &s), "-1,234.56");
        assert_eq!(format_money(f64::NAN, &s), "0.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        let s = DisplaySettings::default();
        assert_eq!(format_number_with_decimals(1234.567, 0, &s), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1, &s), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 3, &s), "1,234.567");
    }

    #[test]
    fn test_format_currency() {
        let s = DisplaySettings::default();
        assert_eq!(format_currency("Q", 42500.0, &s), "Q42,500.00");
        assert_eq!(format_currency("Q", -140.0, &s), "-Q140.00");
        assert_eq!(format_currency("Q", 1234567.5, &european()), "Q1.234.567,50");
    }

    #[test]
    fn test_format_number_int() {
        let s = DisplaySettings::default();
        assert_eq!(format_number_int(1234567.0, &s), "1,234,567");
        assert_eq!(format_number_int(0.0, &s), "0");
        assert_eq!(format_number_int(-1234.0, &s), "-1,234");
    }

    #[test]
    fn test_format_driver_value() {
        let s = DisplaySettings::default();
        assert_eq!(format_driver_value(12.0, &s), "12");
        assert_eq!(format_driver_value(35000.0, &s), "35,000");
        assert_eq!(format_driver_value(92.5, &s), "92.50");
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_string(&DisplaySettings::default()).unwrap();
        assert_eq!(
            json,
            r#"{"thousandsSeparator":",","decimalSeparator":".","decimals":2}"#
        );
    }
}
