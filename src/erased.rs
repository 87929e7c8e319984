//! The type-erased operation surface.
//!
//! Callers that hold a concrete type parameter use the statics on
//! [`Enumeration`] directly. Callers that only learn the target type at
//! runtime — a dictionary-field accessor coercing stored values, for
//! example — carry an [`EnumerationType`] token instead: a `Copy` bundle of
//! the type's erased operations, minted once from the type parameter and
//! passed around as a value.

use std::any::{TypeId, type_name};
use std::fmt;

use crate::enumeration::{AnyEnumeration, Enumeration};
use crate::error::EnumerationError;
use crate::lookup::{self, GuessInput};

/// A runtime handle to one enumeration type's operations.
///
/// # Examples
///
/// ```
/// use enumerations::{enumeration, AnyEnumeration, Enumeration, EnumerationType, GuessInput};
///
/// enumeration! {
///     pub struct Suit {
///         HEARTS = (0, "Hearts"),
///         SPADES = (1, "Spades"),
///     }
/// }
///
/// // Minted where the type is known, used where it is not.
/// let token = EnumerationType::of::<Suit>();
/// assert_eq!(token.get_all().len(), 2);
///
/// let spades = token
///     .guess_from(Some(&GuessInput::from("spades")))
///     .unwrap();
/// assert_eq!(spades.value(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct EnumerationType {
    type_id: TypeId,
    type_name: &'static str,
    get_all: fn(bool) -> Vec<&'static dyn AnyEnumeration>,
    guess: fn(&GuessInput<'_>) -> Result<&'static dyn AnyEnumeration, EnumerationError>,
}

impl EnumerationType {
    /// Mints the token for `T`.
    ///
    /// Cheap enough to call at will: the token is a handful of function
    /// pointers, and discovery still runs lazily on first use of the
    /// operations themselves.
    pub fn of<T: Enumeration>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            get_all: erased_get_all::<T>,
            guess: erased_guess::<T>,
        }
    }

    /// The `TypeId` of the underlying enumeration type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// The name of the underlying enumeration type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether `member` belongs to this enumeration type.
    pub fn owns(&self, member: &dyn AnyEnumeration) -> bool {
        member.type_id() == self.type_id
    }

    /// The default member listing, hidden members excluded.
    pub fn get_all(&self) -> Vec<&'static dyn AnyEnumeration> {
        (self.get_all)(false)
    }

    /// The full member listing, hidden members included.
    pub fn get_all_with_hidden(&self) -> Vec<&'static dyn AnyEnumeration> {
        (self.get_all)(true)
    }

    /// The erased counterpart of [`Enumeration::guess_from`].
    ///
    /// Absent input is an invalid argument here — erased callers forward
    /// possibly-missing raw values, and an absent one must not silently
    /// resolve.
    pub fn guess_from(
        &self,
        input: Option<&GuessInput<'_>>,
    ) -> Result<&'static dyn AnyEnumeration, EnumerationError> {
        match input {
            Some(input) => (self.guess)(input),
            None => Err(EnumerationError::AbsentGuessInput),
        }
    }

    /// [`guess_from`](EnumerationType::guess_from) with every failure,
    /// including absent input, degraded to `None`.
    pub fn try_guess_from(
        &self,
        input: Option<&GuessInput<'_>>,
    ) -> Option<&'static dyn AnyEnumeration> {
        self.guess_from(input).ok()
    }
}

impl fmt::Debug for EnumerationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumerationType")
            .field("type_name", &self.type_name)
            .finish()
    }
}

impl PartialEq for EnumerationType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for EnumerationType {}

fn erased_get_all<T: Enumeration>(include_hidden: bool) -> Vec<&'static dyn AnyEnumeration> {
    if include_hidden {
        T::get_all_with_hidden()
            .iter()
            .map(|member| *member as &'static dyn AnyEnumeration)
            .collect()
    } else {
        T::get_all()
            .into_iter()
            .map(|member| member as &'static dyn AnyEnumeration)
            .collect()
    }
}

fn erased_guess<T: Enumeration>(
    input: &GuessInput<'_>,
) -> Result<&'static dyn AnyEnumeration, EnumerationError> {
    lookup::guess_from::<T>(input).map(|member| member as &'static dyn AnyEnumeration)
}
