use std::borrow::Cow;

use crate::enumeration::{Enumeration, EnumerationCore};
use crate::error::EnumerationError;
use crate::lookup;

/// Identity data for members of ordered enumeration families.
///
/// Embeds an [`EnumerationCore`] and adds a secondary sort key plus a
/// listing-visibility flag. The `order` key drives comparison and the
/// discovery sort; it is independent of `value`. A member with
/// `hide_in_listing` set is excluded from the default
/// [`get_all`](Enumeration::get_all) view but remains reachable through
/// every direct lookup and through
/// [`get_all_with_hidden`](Enumeration::get_all_with_hidden).
///
/// # Examples
///
/// ```
/// use enumerations::OrderedCore;
///
/// const CORE: OrderedCore = OrderedCore::with_static_name(3, "Third", 1, false);
/// assert_eq!(CORE.core().value(), 3);
/// assert_eq!(CORE.order(), 1);
/// assert!(!CORE.hide_in_listing());
/// ```
#[derive(Debug)]
pub struct OrderedCore {
    core: EnumerationCore,
    order: i32,
    hide_in_listing: bool,
}

impl OrderedCore {
    /// Creates an ordered core from a static display name, validating at
    /// compile time when used in a `const` or `static` context.
    pub const fn with_static_name(
        value: i32,
        display_name: &'static str,
        order: i32,
        hide_in_listing: bool,
    ) -> Self {
        Self {
            core: EnumerationCore::with_static_name(value, display_name),
            order,
            hide_in_listing,
        }
    }

    /// Creates an ordered core at runtime, with the same validation as
    /// [`EnumerationCore::new`].
    pub fn new(
        value: i32,
        display_name: impl Into<Cow<'static, str>>,
        order: i32,
        hide_in_listing: bool,
    ) -> Result<Self, EnumerationError> {
        Ok(Self {
            core: EnumerationCore::new(value, display_name)?,
            order,
            hide_in_listing,
        })
    }

    /// The embedded identity data.
    pub fn core(&self) -> &EnumerationCore {
        &self.core
    }

    /// The secondary sort key.
    pub fn order(&self) -> i32 {
        self.order
    }

    /// Whether the member is excluded from default listings.
    pub fn hide_in_listing(&self) -> bool {
        self.hide_in_listing
    }
}

/// The typed contract of ordered enumeration families.
///
/// Implemented by the [`ordered_enumeration!`](crate::ordered_enumeration!)
/// macro. Members of an ordered family are discovered in `order`-ascending
/// sequence rather than declaration order, compare by `order` before value,
/// and may opt out of default listings per member.
///
/// # Examples
///
/// ```
/// use enumerations::{ordered_enumeration, AnyEnumeration, Enumeration, OrderedEnumeration};
///
/// ordered_enumeration! {
///     struct Stage {
///         BUILD = (0, "Build", order = 1),
///         TEST = (1, "Test", order = 2),
///         SHIP = (2, "Ship", order = 3),
///     }
/// }
///
/// let names: Vec<&str> = Stage::get_all()
///     .into_iter()
///     .map(|stage| stage.display_name())
///     .collect();
/// assert_eq!(names, ["Build", "Test", "Ship"]);
/// assert_eq!(Stage::from_order(2).unwrap().value(), 1);
/// ```
pub trait OrderedEnumeration: Enumeration {
    /// The member's ordered identity data.
    fn ordered_core(&self) -> &OrderedCore;

    /// The secondary sort key.
    fn order(&self) -> i32 {
        self.ordered_core().order()
    }

    /// Whether the member is excluded from default listings.
    fn hide_in_listing(&self) -> bool {
        self.ordered_core().hide_in_listing()
    }

    /// The first member with the given order key, hidden members included.
    fn from_order(order: i32) -> Result<&'static Self, EnumerationError> {
        lookup::from_order(order)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AnyEnumeration, Enumeration, EnumerationError, OrderedEnumeration};

    crate::ordered_enumeration! {
        struct Course {
            DESSERT = (0, "Dessert", order = 3),
            STARTER = (1, "Starter", order = 1),
            MAIN = (2, "Main", order = 2),
            CHEF_SPECIAL = (3, "Chef Special", order = 4, hidden),
        }
    }

    #[test]
    fn discovery_sorts_by_order() {
        let values: Vec<i32> = Course::get_all_with_hidden()
            .iter()
            .map(|course| course.value())
            .collect();
        assert_eq!(values, [1, 2, 0, 3]);
    }

    #[test]
    fn hidden_members_are_listed_only_on_request() {
        let default_view: Vec<i32> = Course::get_all()
            .into_iter()
            .map(|course| course.value())
            .collect();
        assert_eq!(default_view, [1, 2, 0]);
        assert_eq!(Course::get_all_with_hidden().len(), 4);
    }

    #[test]
    fn hidden_members_resolve_through_direct_lookups() {
        assert_eq!(Course::from_value(3).unwrap().display_name(), "Chef Special");
        assert_eq!(Course::from_order(4).unwrap().value(), 3);
        assert_eq!(Course::guess_from("chef special").unwrap().value(), 3);
    }

    #[test]
    fn from_order_reports_not_found() {
        assert!(matches!(
            Course::from_order(99),
            Err(EnumerationError::NotFound { kind: "order", .. })
        ));
    }

    #[test]
    fn comparison_uses_order_before_value() {
        assert!(STARTER < MAIN);
        assert!(MAIN < DESSERT);
        assert!(DESSERT.compare(&CHEF_SPECIAL).is_lt());
    }
}
