use thiserror::Error;

use crate::exchange::ConversionError;

/// Phase of the guided input flow. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    AmountEntry,
    SourceSelect,
    TargetSelect,
    ResultShown,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::AmountEntry => "amount-entry",
            Stage::SourceSelect => "source-select",
            Stage::TargetSelect => "target-select",
            Stage::ResultShown => "result-shown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountParseError {
    #[error("nu ai introdus nicio sumă")]
    Empty,
    #[error("\"{0}\" nu este un număr valid")]
    NotANumber(String),
    #[error("suma nu poate fi negativă: {0}")]
    Negative(String),
}

/// Parses typed amount text the way the amount stage and the one-shot command
/// both accept it: surrounding whitespace ignored, finite, not below zero.
pub fn parse_amount(text: &str) -> Result<f64, AmountParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountParseError::NotANumber(trimmed.to_string()))?;

    if !value.is_finite() {
        return Err(AmountParseError::NotANumber(trimmed.to_string()));
    }
    if value < 0.0 {
        return Err(AmountParseError::Negative(trimmed.to_string()));
    }

    // "-0" parses to negative zero, which would render as "-0.00"
    Ok(if value == 0.0 { 0.0 } else { value })
}

/// Anything that can end up in `Session::last_error`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    #[error(transparent)]
    Parse(#[from] AmountParseError),
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl Failure {
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Parse(_) => "parse",
            Failure::Conversion(err) => err.kind(),
        }
    }
}

/// All UI state for one program run.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub stage: Stage,
    pub amount_text: String,
    pub amount: Option<f64>,
    pub source_index: usize,
    pub target_index: usize,
    pub last_error: Option<Failure>,
    pub result: Option<f64>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::AmountEntry,
            amount_text: String::new(),
            amount: None,
            source_index: 0,
            target_index: 0,
            last_error: None,
            result: None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.stage == Stage::ResultShown
    }

    pub fn succeeded(&self) -> bool {
        self.is_finished() && self.result.is_some() && self.last_error.is_none()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
