use std::collections::HashSet;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Codes offered when the configuration does not name its own list.
pub const DEFAULT_CURRENCIES: [&str; 5] = ["EUR", "RON", "GBP", "AED", "RUB"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyListError {
    #[error("currency list is empty")]
    Empty,
    #[error("invalid currency code '{0}': expected three ASCII letters")]
    InvalidCode(String),
    #[error("currency code '{0}' appears more than once")]
    Duplicate(String),
}

/// Ordered, immutable set of ISO 4217 codes the selection stages choose from.
///
/// Selection stages only ever hold an index into this list; the code string is
/// looked up when the request is built or the result is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CurrencyList {
    codes: Vec<String>,
}

impl CurrencyList {
    pub fn new<I, S>(codes: I) -> Result<Self, CurrencyListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut normalized = Vec::new();

        for code in codes {
            let code = code.as_ref().trim();
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(CurrencyListError::InvalidCode(code.to_string()));
            }
            let code = code.to_ascii_uppercase();
            if !seen.insert(code.clone()) {
                return Err(CurrencyListError::Duplicate(code));
            }
            normalized.push(code);
        }

        if normalized.is_empty() {
            return Err(CurrencyListError::Empty);
        }

        Ok(Self { codes: normalized })
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Largest valid cursor position.
    pub fn last_index(&self) -> usize {
        self.codes.len().saturating_sub(1)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.codes.get(index).map(String::as_str)
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        let code = code.trim();
        self.codes.iter().position(|c| c.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for CurrencyList {
    fn default() -> Self {
        Self {
            codes: DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Index<usize> for CurrencyList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.codes[index]
    }
}

impl TryFrom<Vec<String>> for CurrencyList {
    type Error = CurrencyListError;

    fn try_from(codes: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

impl From<CurrencyList> for Vec<String> {
    fn from(list: CurrencyList) -> Self {
        list.codes
    }
}
