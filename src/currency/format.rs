use ratecard_domain::CurrencyCode;

/// Separators used when rendering numbers for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberStyle {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl NumberStyle {
    /// Picks separators from a BCP 47 tag such as `de-DE`; unknown tags use `1,234.56`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "pt" | "nl" | "tr" | "id" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" | "pl" | "cs" | "sv" | "nb" | "fi" | "ru" | "uk" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }
}

pub fn symbol_for(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "BRL" => "R$",
        "AUD" => "A$",
        "CAD" => "C$",
        _ => code,
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(style: NumberStyle, value: f64, precision: u8) -> String {
    let rendered = format!("{:.*}", precision as usize, value.abs());
    let (int_part, fraction) = match rendered.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (rendered.as_str(), None),
    };
    let mut body = group_digits(int_part, style.grouping_separator);
    if let Some(fraction) = fraction {
        body.push(style.decimal_separator);
        body.push_str(fraction);
    }
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        body.insert(0, '-');
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Renders an amount with its currency symbol, rounded to the currency's minor units.
pub fn format_amount(amount: f64, code: &CurrencyCode, style: NumberStyle) -> String {
    let body = format_number(style, amount, minor_units_for(code.as_str()));
    let symbol = symbol_for(code.as_str());
    if symbol == code.as_str() {
        format!("{} {}", body, symbol)
    } else {
        format!("{}{}", symbol, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_and_rounds_to_minor_units() {
        let usd = CurrencyCode::new("USD");
        assert_eq!(format_amount(2437.5, &usd, NumberStyle::default()), "$2,437.50");
        assert_eq!(
            format_amount(1234567.891, &usd, NumberStyle::default()),
            "$1,234,567.89"
        );
        assert_eq!(
            format_amount(15.234375, &usd, NumberStyle::default()),
            "$15.23"
        );
    }

    #[test]
    fn respects_currency_specific_precision() {
        let style = NumberStyle::default();
        assert_eq!(format_amount(1500.4, &CurrencyCode::new("JPY"), style), "¥1,500");
        assert_eq!(
            format_amount(12.3457, &CurrencyCode::new("KWD"), style),
            "12.346 KWD"
        );
    }

    #[test]
    fn locale_changes_separators() {
        let style = NumberStyle::for_locale("de-DE");
        assert_eq!(format_number(style, 1234.5, 2), "1.234,50");
        let style = NumberStyle::for_locale("fr");
        assert_eq!(format_number(style, 1234.5, 2), "1 234,50");
        assert_eq!(NumberStyle::for_locale("en-US"), NumberStyle::default());
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(format_number(NumberStyle::default(), -1234.0, 0), "-1,234");
        assert_eq!(format_number(NumberStyle::default(), -0.001, 2), "0.00");
    }
}
