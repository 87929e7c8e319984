use std::fmt;

/// Errors raised by enumeration construction and lookup.
///
/// Exact-match lookups (`from_value`, `from_display_name`, `from_field_name`,
/// `from_order`) and the terminal stage of `guess_from` report [`NotFound`];
/// the remaining variants are argument-validation failures. The `try_*`
/// lookup variants convert any of these into `None` instead of surfacing
/// them.
///
/// [`NotFound`]: EnumerationError::NotFound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// A member was constructed with a negative value.
    ///
    /// Values are kept non-negative so they can be reinterpreted as unsigned
    /// integers without changing meaning.
    NegativeValue {
        /// The rejected value.
        value: i32,
    },
    /// A member was constructed with an empty display name.
    MissingDisplayName,
    /// A guess was requested for an absent input.
    AbsentGuessInput,
    /// No member of the target enumeration matched the lookup.
    NotFound {
        /// The kind of lookup that failed ("value", "display name", ...).
        kind: &'static str,
        /// The input that matched nothing, rendered as text.
        attempted: String,
        /// The target enumeration's type name.
        enumeration: &'static str,
    },
}

impl EnumerationError {
    pub(crate) fn not_found(
        kind: &'static str,
        attempted: impl fmt::Display,
        enumeration: &'static str,
    ) -> Self {
        EnumerationError::NotFound {
            kind,
            attempted: attempted.to_string(),
            enumeration,
        }
    }
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::NegativeValue { value } => {
                write!(
                    f,
                    "cannot declare an enumeration member with value {}; values must be non-negative",
                    value
                )
            }
            EnumerationError::MissingDisplayName => {
                write!(f, "enumeration members require a non-empty display name")
            }
            EnumerationError::AbsentGuessInput => {
                write!(f, "cannot guess an enumeration member from an absent input")
            }
            EnumerationError::NotFound {
                kind,
                attempted,
                enumeration,
            } => {
                write!(f, "'{}' is not a valid {} in {}", attempted, kind, enumeration)
            }
        }
    }
}

impl std::error::Error for EnumerationError {}
