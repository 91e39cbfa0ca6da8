use std::collections::HashMap;
use std::str::FromStr;

use crate::rates::ConversionError;

/// Conversion rates to RUB, keyed by currency code, e.g. `{"USD": 90.5, "EUR": 98.1}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>
}

impl ExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, code: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(code.into(), rate);
        self
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl FromStr for ExchangeRates {
    type Err = ConversionError;

    /// Parses comma separated `CODE:rate` pairs such as `USD:90.5,EUR:98.1`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut rates = ExchangeRates::new();

        for pair in value.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
            let (code, rate) = pair.split_once(':')
                .ok_or_else(|| ConversionError::InvalidRate(pair.to_string()))?;

            let code = code.trim().to_uppercase();
            let rate: f64 = rate.trim().parse()
                .map_err(|_| ConversionError::InvalidRate(pair.to_string()))?;

            if code.is_empty() {
                return Err(ConversionError::InvalidRate(pair.to_string()));
            }

            rates = rates.with_rate(code, rate);
        }

        Ok(rates)
    }
}
