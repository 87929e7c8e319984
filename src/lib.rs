//! Rich enumerations: named, valued singleton members with discovery,
//! caching, and heuristic lookup.
//!
//! This crate is for domains where a plain `enum` is too weak — members need
//! to carry data or behavior — but callers still want enum-like identity,
//! equality, ordering, and round-trip lookup. Each enumeration type declares
//! a fixed set of singleton members; the crate discovers them on first use,
//! caches the result for the life of the process, and resolves them from
//! values, names, identifiers, or loosely-typed "guess" input.
//!
//! # Basic Usage
//!
//! ```rust
//! use enumerations::{enumeration, AnyEnumeration, Enumeration};
//!
//! enumeration! {
//!     /// Employee classification.
//!     pub struct EmployeeType {
//!         MANAGER = (0, "Manager"),
//!         SERVANT = (1, "Servant"),
//!         ASSISTANT_TO_THE_REGIONAL_MANAGER = (2, "Assistant to the Regional Manager"),
//!     }
//! }
//!
//! // Listing: every declared member, in declaration order.
//! assert_eq!(EmployeeType::get_all().len(), 3);
//!
//! // Exact lookups.
//! let manager = EmployeeType::from_value(0).unwrap();
//! assert_eq!(manager.display_name(), "Manager");
//! assert_eq!(EmployeeType::from_field_name("servant").unwrap().value(), 1);
//!
//! // Heuristic lookup: numbers, names, identifiers, spacing-insensitive.
//! assert_eq!(EmployeeType::guess_from("servant").unwrap().value(), 1);
//! assert_eq!(
//!     EmployeeType::guess_from("AssistantToTheRegionalManager").unwrap().value(),
//!     2
//! );
//!
//! // Misses are explicit.
//! assert!(EmployeeType::from_value(5).is_err());
//! ```
//!
//! # Ordered Families and Hidden Members
//!
//! An ordered enumeration carries a secondary sort key, independent of the
//! value, and may hide individual members from default listings while
//! keeping them resolvable:
//!
//! ```rust
//! use enumerations::{ordered_enumeration, AnyEnumeration, Enumeration, OrderedEnumeration};
//!
//! ordered_enumeration! {
//!     pub struct Severity {
//!         ERROR = (0, "Error", order = 3),
//!         WARNING = (1, "Warning", order = 2),
//!         INFO = (2, "Info", order = 1),
//!         TRACE = (3, "Trace", order = 4, hidden),
//!     }
//! }
//!
//! // Listed by order, hidden members excluded.
//! let listed: Vec<&str> = Severity::get_all()
//!     .into_iter()
//!     .map(|severity| severity.display_name())
//!     .collect();
//! assert_eq!(listed, ["Info", "Warning", "Error"]);
//!
//! // Hidden members stay reachable through every direct lookup.
//! assert_eq!(Severity::from_value(3).unwrap().display_name(), "Trace");
//! assert_eq!(Severity::from_order(4).unwrap().value(), 3);
//! ```
//!
//! # Members with Behavior
//!
//! Types whose members differ in behavior implement the traits by hand: the
//! struct carries whatever payload it needs (including trait objects chosen
//! per member), [`declared_members!`] builds the table, and
//! [`impl_enumeration_ops!`] fills in the operator impls. Only
//! [`AnyEnumeration::core`] is mandatory; [`AnyEnumeration::matches_guess`]
//! optionally extends the guess resolver with per-member rules such as
//! aliases.
//!
//! # Concurrency
//!
//! Discovery runs at most once per type, on first use, and is safe under
//! concurrent first access: the type-keyed registry populates each entry
//! exactly once and later reads are cheap shared-lock lookups. Members are
//! plain `static`s; everything handed out is `&'static`.
//!
//! [`declared_members!`]: crate::declared_members!
//! [`impl_enumeration_ops!`]: crate::impl_enumeration_ops!

mod declare;
mod discovery;
mod enumeration;
mod erased;
mod error;
mod lookup;
mod ordered;
mod registry;

pub use discovery::DeclaredMember;
pub use enumeration::{AnyEnumeration, Enumeration, EnumerationCore};
pub use erased::EnumerationType;
pub use error::EnumerationError;
pub use lookup::GuessInput;
pub use ordered::{OrderedCore, OrderedEnumeration};

#[doc(hidden)]
pub use paste::paste as __paste;
