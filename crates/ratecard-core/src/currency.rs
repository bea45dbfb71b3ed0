use std::collections::BTreeMap;

use ratecard_domain::CurrencyCode;

/// USD-based exchange rates keyed by currency code.
///
/// An empty table is valid: every conversion then degrades to identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<CurrencyCode, f64>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rates<I, K>(rates: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<CurrencyCode>,
    {
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.into(), rate))
                .collect(),
        }
    }

    pub fn insert(&mut self, code: CurrencyCode, rate: f64) {
        self.rates.insert(code, rate);
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Known codes in alphabetical order.
    pub fn currencies(&self) -> Vec<&CurrencyCode> {
        self.rates.keys().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CurrencyCode, f64)> {
        self.rates.iter().map(|(code, rate)| (code, *rate))
    }

    /// Converts `amount` between two currencies by way of USD.
    pub fn convert(&self, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
        if from == to {
            return amount;
        }
        let amount_in_usd = if from.is_base() {
            amount
        } else {
            amount / self.effective_rate(from)
        };
        if to.is_base() {
            amount_in_usd
        } else {
            amount_in_usd * self.effective_rate(to)
        }
    }

    /// Unknown, zero or non-finite rates count as 1.
    fn effective_rate(&self, code: &CurrencyCode) -> f64 {
        match self.rate(code) {
            Some(rate) if rate.is_finite() && rate != 0.0 => rate,
            _ => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RateTable {
        RateTable::from_rates([("USD", 1.0), ("EUR", 0.5), ("JPY", 150.0), ("XXX", 0.0)])
    }

    #[test]
    fn same_currency_is_identity() {
        let eur = CurrencyCode::new("EUR");
        assert_eq!(table().convert(42.0, &eur, &eur), 42.0);
    }

    #[test]
    fn converts_through_usd() {
        let rates = table();
        let usd = CurrencyCode::new("USD");
        let eur = CurrencyCode::new("EUR");
        let jpy = CurrencyCode::new("JPY");

        assert_eq!(rates.convert(10.0, &usd, &eur), 5.0);
        assert_eq!(rates.convert(10.0, &eur, &usd), 20.0);
        assert_eq!(rates.convert(10.0, &eur, &jpy), 3000.0);
    }

    #[test]
    fn unknown_and_zero_rates_count_as_one() {
        let rates = table();
        let usd = CurrencyCode::new("USD");
        assert_eq!(rates.convert(10.0, &usd, &CurrencyCode::new("GBP")), 10.0);
        assert_eq!(rates.convert(10.0, &CurrencyCode::new("XXX"), &usd), 10.0);
        assert_eq!(
            RateTable::new().convert(7.5, &CurrencyCode::new("EUR"), &CurrencyCode::new("JPY")),
            7.5
        );
    }

    #[test]
    fn currencies_are_sorted() {
        let binding = table();
        let codes: Vec<&str> = binding.currencies().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["EUR", "JPY", "USD", "XXX"]);
    }
}
