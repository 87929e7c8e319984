use std::any::Any;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use crate::discovery::DeclaredMember;
use crate::error::EnumerationError;
use crate::lookup::{self, GuessInput};
use crate::ordered::OrderedCore;
use crate::registry;

/// The identity data embedded in every enumeration member.
///
/// A member is a singleton `static` of its concrete type; the type embeds an
/// `EnumerationCore` (or an [`OrderedCore`], which itself embeds one) and
/// hands it out through [`AnyEnumeration::core`]. The core carries:
///
/// - `value` — the member's non-negative integer value,
/// - `display_name` — the human-readable name, never empty,
/// - `field_name` — the identifier the member was declared under, bound
///   exactly once when the owning type is first discovered and unset before
///   that.
///
/// # Examples
///
/// ```
/// use enumerations::EnumerationCore;
///
/// const CORE: EnumerationCore = EnumerationCore::with_static_name(7, "Lucky");
/// assert_eq!(CORE.value(), 7);
/// assert_eq!(CORE.display_name(), "Lucky");
/// assert_eq!(CORE.field_name(), None);
/// ```
///
/// The checked constructor rejects malformed members:
///
/// ```
/// use enumerations::{EnumerationCore, EnumerationError};
///
/// assert!(matches!(
///     EnumerationCore::new(-1, "Backwards"),
///     Err(EnumerationError::NegativeValue { value: -1 })
/// ));
/// assert!(matches!(
///     EnumerationCore::new(1, ""),
///     Err(EnumerationError::MissingDisplayName)
/// ));
/// ```
#[derive(Debug)]
pub struct EnumerationCore {
    value: i32,
    display_name: Cow<'static, str>,
    field_name: OnceLock<&'static str>,
}

impl EnumerationCore {
    /// Creates a core from a static display name, validating at compile time
    /// when used in a `const` or `static` context.
    ///
    /// A negative value or an empty display name fails const evaluation, so
    /// a malformed declaration cannot make it into a binary.
    pub const fn with_static_name(value: i32, display_name: &'static str) -> Self {
        assert!(value >= 0, "enumeration values must be non-negative");
        assert!(
            !display_name.is_empty(),
            "enumeration display names must not be empty"
        );
        Self {
            value,
            display_name: Cow::Borrowed(display_name),
            field_name: OnceLock::new(),
        }
    }

    /// Creates a core at runtime, rejecting a negative value or an empty
    /// display name.
    pub fn new(
        value: i32,
        display_name: impl Into<Cow<'static, str>>,
    ) -> Result<Self, EnumerationError> {
        let display_name = display_name.into();
        if value < 0 {
            return Err(EnumerationError::NegativeValue { value });
        }
        if display_name.is_empty() {
            return Err(EnumerationError::MissingDisplayName);
        }
        Ok(Self {
            value,
            display_name,
            field_name: OnceLock::new(),
        })
    }

    /// The member's integer value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The value reinterpreted as an unsigned integer.
    ///
    /// Lossless because construction rejects negative values.
    pub fn unsigned_value(&self) -> u32 {
        self.value as u32
    }

    /// The member's display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The identifier the member was declared under, or `None` if the owning
    /// type has not been discovered yet.
    pub fn field_name(&self) -> Option<&'static str> {
        self.field_name.get().copied()
    }

    /// Binds the declaring identifier. First binding wins; the discovery
    /// engine calls this exactly once per member, before the discovered list
    /// is published.
    pub(crate) fn bind_field_name(&self, field_name: &'static str) {
        let _ = self.field_name.set(field_name);
    }
}

/// The object-safe contract shared by every enumeration member.
///
/// This is the erased half of the API: anything that embeds an
/// [`EnumerationCore`] and can be treated uniformly — compared, hashed,
/// printed, matched against guess input — through a `&dyn AnyEnumeration`.
/// The typed half lives on [`Enumeration`].
///
/// Implementations usually come from the [`enumeration!`] or
/// [`ordered_enumeration!`] macros; hand-written impls only need [`core`],
/// plus [`ordering`] for ordered families and [`matches_guess`] for a custom
/// resolution hook.
///
/// [`enumeration!`]: crate::enumeration!
/// [`ordered_enumeration!`]: crate::ordered_enumeration!
/// [`core`]: AnyEnumeration::core
/// [`ordering`]: AnyEnumeration::ordering
/// [`matches_guess`]: AnyEnumeration::matches_guess
pub trait AnyEnumeration: Any + Send + Sync {
    /// The member's embedded identity data.
    fn core(&self) -> &EnumerationCore;

    /// Ordering metadata, present only for members of ordered families.
    fn ordering(&self) -> Option<&OrderedCore> {
        None
    }

    /// Custom hook consulted by the guess resolver before textual matching.
    ///
    /// The default never matches. Override it to resolve inputs the built-in
    /// stages cannot, such as aliases or legacy spellings.
    fn matches_guess(&self, input: &GuessInput<'_>) -> bool {
        let _ = input;
        false
    }

    /// The member's integer value.
    fn value(&self) -> i32 {
        self.core().value()
    }

    /// The value reinterpreted as an unsigned integer.
    fn unsigned_value(&self) -> u32 {
        self.core().unsigned_value()
    }

    /// The member's display name.
    fn display_name(&self) -> &str {
        self.core().display_name()
    }

    /// The identifier the member was declared under, once discovered.
    fn field_name(&self) -> Option<&'static str> {
        self.core().field_name()
    }

    /// Compares two members: by `order` when both carry ordering metadata,
    /// by `value` otherwise.
    fn compare(&self, other: &dyn AnyEnumeration) -> Ordering {
        match (self.ordering(), other.ordering()) {
            (Some(this), Some(that)) => this.order().cmp(&that.order()),
            _ => self.value().cmp(&other.value()),
        }
    }

    /// Equality across the erased surface: same concrete type, same value.
    ///
    /// Members of different enumeration types are never equal, even when
    /// their values coincide.
    fn same_as(&self, other: &dyn AnyEnumeration) -> bool {
        self.type_id() == other.type_id() && self.value() == other.value()
    }

    /// Whether this member equals any of the given candidates, under the
    /// [`same_as`](AnyEnumeration::same_as) contract.
    fn is_any_of(&self, candidates: &[&dyn AnyEnumeration]) -> bool {
        candidates.iter().any(|candidate| self.same_as(*candidate))
    }
}

impl fmt::Display for dyn AnyEnumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl fmt::Debug for dyn AnyEnumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyEnumeration")
            .field("value", &self.value())
            .field("display_name", &self.display_name())
            .finish()
    }
}

impl PartialEq for dyn AnyEnumeration {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for dyn AnyEnumeration {}

/// The hash covers the value alone, not the concrete type, mirroring the
/// equality contract's value component. Two members of unrelated types with
/// the same value collide and are disambiguated by `eq`.
impl Hash for dyn AnyEnumeration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

/// The typed half of the enumeration contract.
///
/// A concrete enumeration type declares its singleton members as `static`
/// items and lists them in [`declared_members`]; everything else — discovery,
/// caching, the lookup family — is provided. Discovery runs on the first
/// call into any provided operation and its result is cached for the life of
/// the process.
///
/// # Examples
///
/// ```
/// use enumerations::{enumeration, AnyEnumeration, Enumeration};
///
/// enumeration! {
///     /// Compass directions.
///     pub struct Direction {
///         NORTH = (0, "North"),
///         EAST = (1, "East"),
///         SOUTH = (2, "South"),
///         WEST = (3, "West"),
///     }
/// }
///
/// assert_eq!(Direction::get_all().len(), 4);
/// assert_eq!(Direction::from_value(2).unwrap().display_name(), "South");
/// assert_eq!(Direction::from_field_name("west").unwrap().value(), 3);
/// assert!(Direction::from_display_name("Up").is_err());
/// ```
///
/// [`declared_members`]: Enumeration::declared_members
pub trait Enumeration: AnyEnumeration + Sized {
    /// Every declared member with its declaring identifier, in declaration
    /// order.
    ///
    /// The [`declared_members!`](crate::declared_members!) macro builds this
    /// table from a list of `static` member names.
    fn declared_members() -> &'static [DeclaredMember<Self>];

    /// All members of this type, in discovery order, excluding members of
    /// ordered families that are hidden from listing.
    ///
    /// The filtered view is derived from the cached raw list on every call.
    fn get_all() -> Vec<&'static Self> {
        registry::members::<Self>()
            .iter()
            .copied()
            .filter(|member| {
                member
                    .ordering()
                    .map_or(true, |ordering| !ordering.hide_in_listing())
            })
            .collect()
    }

    /// All members of this type, in discovery order, including hidden ones.
    ///
    /// Returns the cached list itself; repeated calls return the same slice.
    fn get_all_with_hidden() -> &'static [&'static Self] {
        registry::members::<Self>()
    }

    /// The first member with the given value, hidden members included.
    fn from_value(value: i32) -> Result<&'static Self, EnumerationError> {
        lookup::from_value(value)
    }

    /// The first member whose display name matches exactly,
    /// case-sensitively.
    fn from_display_name(display_name: &str) -> Result<&'static Self, EnumerationError> {
        lookup::from_display_name(display_name)
    }

    /// The first member whose declared identifier matches,
    /// case-insensitively.
    fn from_field_name(field_name: &str) -> Result<&'static Self, EnumerationError> {
        lookup::from_field_name(field_name)
    }

    /// Resolves loosely-typed input to a member.
    ///
    /// The stages run in a fixed order and the first one that fires decides
    /// the outcome: an instance of this type resolves to its canonical
    /// singleton; numeric input (or text that parses as an integer) resolves
    /// by value; then the per-member [`matches_guess`] hook is consulted;
    /// finally the input's text form is compared case-insensitively against
    /// display and field names, both as written and with spaces and
    /// underscores stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use enumerations::{enumeration, AnyEnumeration, Enumeration};
    ///
    /// enumeration! {
    ///     struct Tone {
    ///         BRIGHT = (0, "Bright"),
    ///         PITCH_DARK = (1, "Pitch Dark"),
    ///     }
    /// }
    ///
    /// assert_eq!(Tone::guess_from(0).unwrap().display_name(), "Bright");
    /// assert_eq!(Tone::guess_from("bright").unwrap().value(), 0);
    /// assert_eq!(Tone::guess_from("PitchDark").unwrap().value(), 1);
    /// assert!(Tone::guess_from("Gloomy").is_err());
    /// ```
    ///
    /// [`matches_guess`]: AnyEnumeration::matches_guess
    fn guess_from<'a>(input: impl Into<GuessInput<'a>>) -> Result<&'static Self, EnumerationError> {
        lookup::guess_from(&input.into())
    }

    /// [`guess_from`](Enumeration::guess_from) with every failure degraded
    /// to `None`.
    ///
    /// Callers opting in must treat `None` as "no match", never as a default
    /// member.
    fn try_guess_from<'a>(input: impl Into<GuessInput<'a>>) -> Option<&'static Self> {
        lookup::guess_from(&input.into()).ok()
    }

    /// Null-safe guessing: absent input resolves to `Ok(None)` without
    /// invoking the heuristic.
    fn guess_from_opt<'a>(
        input: Option<impl Into<GuessInput<'a>>>,
    ) -> Result<Option<&'static Self>, EnumerationError> {
        match input {
            Some(input) => lookup::guess_from(&input.into()).map(Some),
            None => Ok(None),
        }
    }
}
