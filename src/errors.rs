//! Unified error handling for model construction and inference.
//!
//! This module defines `HmmError`, the central error type used by model
//! validation, emission evaluation, and the inference recursions. Model
//! shape problems are caught once at construction; the recursions only
//! ever report out-of-range symbols and zero-likelihood observations.

/// Unified error type for model construction and inference routines.
#[derive(Debug, Clone, PartialEq)]
pub enum HmmError {
    // ---- model validation ----
    /// A probability table that must sum to 1 does not, within tolerance.
    NotNormalized { what: String, sum: f64 },

    /// A probability table contains a negative entry.
    NegativeEntry { what: String, value: f64 },

    /// A gaussian standard deviation is zero or negative.
    NonPositiveStd {
        channel: usize,
        state: usize,
        value: f64,
    },

    /// Two parts of the model disagree on a dimension.
    DimensionMismatch {
        what: String,
        expected: usize,
        found: usize,
    },

    /// The model has no states.
    EmptyModel,

    // ---- emission evaluation ----
    /// A categorical observation index is outside the channel's symbol table.
    SymbolOutOfRange {
        channel: usize,
        symbol: usize,
        n_symbols: usize,
    },

    // ---- inference ----
    /// An observation has zero likelihood under every state, so the
    /// message at this position cannot be normalized.
    ZeroLikelihood { position: usize },
}

pub type HmmResult<T> = Result<T, HmmError>;

impl std::fmt::Display for HmmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- model validation ----
            HmmError::NotNormalized { what, sum } => {
                write!(f, "{} sums to {}, not 1", what, sum)
            }
            HmmError::NegativeEntry { what, value } => {
                write!(f, "{} contains a negative entry {}", what, value)
            }
            HmmError::NonPositiveStd {
                channel,
                state,
                value,
            } => write!(
                f,
                "channel {} state {} has non-positive standard deviation {}",
                channel, state, value
            ),
            HmmError::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "{} has dimension {}, expected {}",
                what, found, expected
            ),
            HmmError::EmptyModel => write!(f, "model must have at least one state"),

            // ---- emission evaluation ----
            HmmError::SymbolOutOfRange {
                channel,
                symbol,
                n_symbols,
            } => write!(
                f,
                "channel {} observed symbol {} outside its table of {} symbols",
                channel, symbol, n_symbols
            ),

            // ---- inference ----
            HmmError::ZeroLikelihood { position } => write!(
                f,
                "observation at position {} has zero likelihood under every state",
                position
            ),
        }
    }
}

impl std::error::Error for HmmError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = HmmError::NotNormalized {
            what: "initial distribution".to_string(),
            sum: 0.9,
        };
        assert_eq!(e.to_string(), "initial distribution sums to 0.9, not 1");

        let e = HmmError::SymbolOutOfRange {
            channel: 1,
            symbol: 4,
            n_symbols: 4,
        };
        assert_eq!(
            e.to_string(),
            "channel 1 observed symbol 4 outside its table of 4 symbols"
        );

        let e = HmmError::ZeroLikelihood { position: 7 };
        assert_eq!(
            e.to_string(),
            "observation at position 7 has zero likelihood under every state"
        );
    }
}
