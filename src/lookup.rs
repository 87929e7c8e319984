//! Exact-match and heuristic resolution over cached member lists.
//!
//! Every operation here searches the hidden-inclusive cached list of the
//! target type; listing visibility never affects direct lookup. Exact
//! matches surface [`EnumerationError::NotFound`] on a miss — only the
//! `try_*` entry points on [`Enumeration`](crate::Enumeration) degrade
//! failures to `None`.

use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::fmt;

use crate::enumeration::{AnyEnumeration, Enumeration};
use crate::error::EnumerationError;
use crate::ordered::OrderedEnumeration;
use crate::registry;

/// Loosely-typed input accepted by the guess resolver.
///
/// `From` conversions cover the primitive integer and float types plus the
/// usual string shapes, so call sites can pass raw inputs directly:
///
/// ```
/// use enumerations::GuessInput;
///
/// let from_number: GuessInput<'_> = 2.into();
/// let from_text: GuessInput<'_> = "Servant".into();
/// assert_eq!(from_number.text_form(), "2");
/// assert_eq!(from_text.text_form(), "Servant");
/// ```
pub enum GuessInput<'a> {
    /// A numeric value, resolved against member values.
    Integer(i64),
    /// A floating-point value, rounded and resolved against member values.
    Float(f64),
    /// Free text, resolved by integer parsing, the custom hook, then name
    /// comparison.
    Text(Cow<'a, str>),
    /// An existing member, possibly of another enumeration type.
    Instance(&'a dyn AnyEnumeration),
}

impl<'a> GuessInput<'a> {
    /// Wraps an existing member for re-resolution.
    ///
    /// An instance of the target type short-circuits to its canonical
    /// singleton; an instance of a foreign type is matched through its
    /// display name.
    pub fn instance(instance: &'a dyn AnyEnumeration) -> Self {
        GuessInput::Instance(instance)
    }

    /// The input's text form, as used by the parsing and name-comparison
    /// stages.
    pub fn text_form(&self) -> Cow<'_, str> {
        match self {
            GuessInput::Integer(value) => Cow::Owned(value.to_string()),
            GuessInput::Float(value) => Cow::Owned(value.to_string()),
            GuessInput::Text(text) => Cow::Borrowed(text.as_ref()),
            GuessInput::Instance(instance) => Cow::Borrowed(instance.display_name()),
        }
    }
}

macro_rules! guess_input_from_int {
    ($($int:ty),+ $(,)?) => {
        $(
            impl From<$int> for GuessInput<'_> {
                fn from(value: $int) -> Self {
                    GuessInput::Integer(value as i64)
                }
            }
        )+
    };
}

guess_input_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for GuessInput<'_> {
    fn from(value: f32) -> Self {
        GuessInput::Float(value as f64)
    }
}

impl From<f64> for GuessInput<'_> {
    fn from(value: f64) -> Self {
        GuessInput::Float(value)
    }
}

impl<'a> From<&'a str> for GuessInput<'a> {
    fn from(text: &'a str) -> Self {
        GuessInput::Text(Cow::Borrowed(text))
    }
}

impl From<String> for GuessInput<'_> {
    fn from(text: String) -> Self {
        GuessInput::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for GuessInput<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        GuessInput::Text(text)
    }
}

/// First cached member satisfying the predicate, else a `NotFound` carrying
/// the attempted input, the lookup kind, and the target type.
pub(crate) fn parse<T, K>(
    kind: &'static str,
    attempted: &K,
    predicate: impl Fn(&T) -> bool,
) -> Result<&'static T, EnumerationError>
where
    T: Enumeration,
    K: fmt::Display + ?Sized,
{
    registry::members::<T>()
        .iter()
        .copied()
        .find(|member| predicate(member))
        .ok_or_else(|| EnumerationError::not_found(kind, attempted, type_name::<T>()))
}

pub(crate) fn from_value<T: Enumeration>(value: i32) -> Result<&'static T, EnumerationError> {
    parse("value", &value, |member: &T| member.value() == value)
}

pub(crate) fn from_display_name<T: Enumeration>(
    display_name: &str,
) -> Result<&'static T, EnumerationError> {
    parse("display name", display_name, |member: &T| {
        member.display_name() == display_name
    })
}

pub(crate) fn from_field_name<T: Enumeration>(
    field_name: &str,
) -> Result<&'static T, EnumerationError> {
    parse("field name", field_name, |member: &T| {
        member
            .field_name()
            .map_or(false, |candidate| eq_ignore_case(candidate, field_name))
    })
}

pub(crate) fn from_order<T: OrderedEnumeration>(
    order: i32,
) -> Result<&'static T, EnumerationError> {
    parse("order", &order, |member: &T| {
        member
            .ordering()
            .map_or(false, |ordering| ordering.order() == order)
    })
}

/// The staged heuristic resolver.
///
/// Stage order is fixed; the first stage that applies decides the outcome.
/// Numeric stages resolve by value and their miss is terminal — a number
/// that matches no member value never falls through to name comparison.
pub(crate) fn guess_from<T: Enumeration>(
    input: &GuessInput<'_>,
) -> Result<&'static T, EnumerationError> {
    // Identity: an instance of the target type resolves to its canonical
    // singleton.
    if let GuessInput::Instance(instance) = input {
        let instance: &dyn AnyEnumeration = *instance;
        if instance.type_id() == TypeId::of::<T>() {
            return from_value(instance.value());
        }
    }

    // Numeric coercion.
    match *input {
        GuessInput::Integer(value) => return from_wide_value(value),
        GuessInput::Float(value) => return from_float_value(value),
        _ => {}
    }

    // Text that parses as an integer resolves by value.
    let text = input.text_form();
    if let Ok(value) = text.trim().parse::<i64>() {
        return from_wide_value(value);
    }

    // Per-member custom hook, first affirmative wins.
    if let Some(member) = registry::members::<T>()
        .iter()
        .copied()
        .find(|member| member.matches_guess(input))
    {
        return Ok(member);
    }

    // Name comparison, raw and normalized.
    parse("guess value", &text, |member: &T| {
        text_matches(&text, member.display_name())
            || member
                .field_name()
                .map_or(false, |field_name| text_matches(&text, field_name))
    })
}

fn from_wide_value<T: Enumeration>(value: i64) -> Result<&'static T, EnumerationError> {
    match i32::try_from(value) {
        Ok(value) => from_value(value),
        Err(_) => Err(EnumerationError::not_found("value", value, type_name::<T>())),
    }
}

fn from_float_value<T: Enumeration>(value: f64) -> Result<&'static T, EnumerationError> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i32::MIN as f64 && rounded <= i32::MAX as f64 {
        from_value(rounded as i32)
    } else {
        Err(EnumerationError::not_found("value", value, type_name::<T>()))
    }
}

fn text_matches(input: &str, candidate: &str) -> bool {
    eq_ignore_case(input, candidate) || normalized_eq(input, candidate)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive comparison that also ignores spaces and underscores, so
/// `"Assistant to the Regional Manager"`, `"AssistantToTheRegionalManager"`,
/// and `ASSISTANT_TO_THE_REGIONAL_MANAGER` all agree.
fn normalized_eq(a: &str, b: &str) -> bool {
    normalized_chars(a).eq(normalized_chars(b))
}

fn normalized_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '_')
        .flat_map(char::to_lowercase)
}
