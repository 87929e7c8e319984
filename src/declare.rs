//! Declaration macros for enumeration types.
//!
//! [`enumeration!`] and [`ordered_enumeration!`] cover the common case: a
//! struct wrapping the identity core, one `static` per member, a raw
//! `*_VALUE` constant per member for use in `match` patterns, the trait
//! impls, and the declaration table. Types needing per-member payloads or
//! behavior implement the traits by hand and use [`declared_members!`] for
//! the table plus [`impl_enumeration_ops!`] for the standard operator impls.
//!
//! [`enumeration!`]: crate::enumeration!
//! [`ordered_enumeration!`]: crate::ordered_enumeration!
//! [`declared_members!`]: crate::declared_members!
//! [`impl_enumeration_ops!`]: crate::impl_enumeration_ops!

/// Declares a complete base enumeration type.
///
/// Each member line is `IDENT = (value, display_name)`. The macro emits the
/// type, one `static` per member, a `IDENT_VALUE` constant per member, and
/// the [`AnyEnumeration`](crate::AnyEnumeration),
/// [`Enumeration`](crate::Enumeration), and standard operator impls.
///
/// # Examples
///
/// ```
/// use enumerations::{enumeration, AnyEnumeration, Enumeration};
///
/// enumeration! {
///     /// Employee classification.
///     pub struct EmployeeType {
///         MANAGER = (0, "Manager"),
///         SERVANT = (1, "Servant"),
///         ASSISTANT_TO_THE_REGIONAL_MANAGER = (2, "Assistant to the Regional Manager"),
///     }
/// }
///
/// assert_eq!(MANAGER.display_name(), "Manager");
/// assert_eq!(MANAGER_VALUE, 0);
/// assert_eq!(EmployeeType::get_all().len(), 3);
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$type_meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = ($value:expr, $display_name:expr)
            ),+ $(,)?
        }
    ) => {
        $(#[$type_meta])*
        #[derive(Debug)]
        $vis struct $name {
            core: $crate::EnumerationCore,
        }

        $(
            $(#[$member_meta])*
            $vis static $member: $name = $name {
                core: $crate::EnumerationCore::with_static_name($value, $display_name),
            };
        )+

        $crate::__paste! {
            $(
                #[doc = concat!("Raw value of `", stringify!($member), "`.")]
                $vis const [<$member _VALUE>]: i32 = $value;
            )+
        }

        impl $crate::AnyEnumeration for $name {
            fn core(&self) -> &$crate::EnumerationCore {
                &self.core
            }
        }

        impl $crate::Enumeration for $name {
            fn declared_members() -> &'static [$crate::DeclaredMember<Self>] {
                $crate::declared_members!($name: $($member),+)
            }
        }

        $crate::impl_enumeration_ops!($name);
    };
}

/// Declares a complete ordered enumeration type.
///
/// Each member line is `IDENT = (value, display_name, order = key)` with an
/// optional trailing `, hidden` to exclude the member from default listings.
///
/// # Examples
///
/// ```
/// use enumerations::{ordered_enumeration, AnyEnumeration, Enumeration, OrderedEnumeration};
///
/// ordered_enumeration! {
///     /// Log severities, listed mildest first regardless of value.
///     pub struct Severity {
///         ERROR = (0, "Error", order = 3),
///         WARNING = (1, "Warning", order = 2),
///         INFO = (2, "Info", order = 1),
///         TRACE = (3, "Trace", order = 4, hidden),
///     }
/// }
///
/// let listed: Vec<i32> = Severity::get_all().iter().map(|s| s.value()).collect();
/// assert_eq!(listed, [2, 1, 0]);
/// assert_eq!(Severity::from_order(4).unwrap().display_name(), "Trace");
/// ```
#[macro_export]
macro_rules! ordered_enumeration {
    (
        $(#[$type_meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$member_meta:meta])*
                $member:ident = ($value:expr, $display_name:expr, order = $order:expr $(, $hidden:ident)?)
            ),+ $(,)?
        }
    ) => {
        $(#[$type_meta])*
        #[derive(Debug)]
        $vis struct $name {
            ordered: $crate::OrderedCore,
        }

        $(
            $(#[$member_meta])*
            $vis static $member: $name = $name {
                ordered: $crate::OrderedCore::with_static_name(
                    $value,
                    $display_name,
                    $order,
                    $crate::__hidden_flag!($($hidden)?),
                ),
            };
        )+

        $crate::__paste! {
            $(
                #[doc = concat!("Raw value of `", stringify!($member), "`.")]
                $vis const [<$member _VALUE>]: i32 = $value;
            )+
        }

        impl $crate::AnyEnumeration for $name {
            fn core(&self) -> &$crate::EnumerationCore {
                self.ordered.core()
            }

            fn ordering(&self) -> ::core::option::Option<&$crate::OrderedCore> {
                ::core::option::Option::Some(&self.ordered)
            }
        }

        impl $crate::Enumeration for $name {
            fn declared_members() -> &'static [$crate::DeclaredMember<Self>] {
                $crate::declared_members!($name: $($member),+)
            }
        }

        impl $crate::OrderedEnumeration for $name {
            fn ordered_core(&self) -> &$crate::OrderedCore {
                &self.ordered
            }
        }

        $crate::impl_enumeration_ops!($name);
    };
}

/// Builds a declaration table from a list of member `static`s, capturing
/// each declaring identifier as the member's field name.
///
/// Used inside a hand-written [`Enumeration::declared_members`] impl when
/// the declaration macros don't fit:
///
/// ```ignore
/// impl Enumeration for Weapon {
///     fn declared_members() -> &'static [DeclaredMember<Self>] {
///         declared_members!(Weapon: GREAT_SWORD, SWORD, MACE)
///     }
/// }
/// ```
///
/// [`Enumeration::declared_members`]: crate::Enumeration::declared_members
#[macro_export]
macro_rules! declared_members {
    ($name:ty: $($member:ident),+ $(,)?) => {{
        static MEMBERS: &[$crate::DeclaredMember<$name>] = &[
            $(
                $crate::DeclaredMember {
                    field_name: ::core::stringify!($member),
                    instance: &$member,
                }
            ),+
        ];
        MEMBERS
    }};
}

/// Implements `Display`, `PartialEq`/`Eq`, `Hash`, `PartialOrd`/`Ord`, and
/// `From<&T> for i32` for a hand-written enumeration type, matching what the
/// declaration macros emit.
///
/// Equality and the hash cover the value alone; ordering goes through
/// [`AnyEnumeration::compare`](crate::AnyEnumeration::compare) with a value
/// tiebreak.
#[macro_export]
macro_rules! impl_enumeration_ops {
    ($name:ty) => {
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::AnyEnumeration::display_name(self))
            }
        }

        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                $crate::AnyEnumeration::value(self) == $crate::AnyEnumeration::value(other)
            }
        }

        impl ::core::cmp::Eq for $name {}

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::AnyEnumeration::value(self), state);
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                ::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                $crate::AnyEnumeration::compare(self, other).then_with(|| {
                    ::core::cmp::Ord::cmp(
                        &$crate::AnyEnumeration::value(self),
                        &$crate::AnyEnumeration::value(other),
                    )
                })
            }
        }

        impl ::core::convert::From<&$name> for i32 {
            fn from(member: &$name) -> i32 {
                $crate::AnyEnumeration::value(member)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __hidden_flag {
    () => {
        false
    };
    (hidden) => {
        true
    };
}
