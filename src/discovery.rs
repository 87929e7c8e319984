use crate::enumeration::{AnyEnumeration, Enumeration};

/// One entry of a type's declaration table: a singleton member together with
/// the identifier it was declared under.
///
/// Tables are built with the [`declared_members!`](crate::declared_members!)
/// macro, which captures the identifier with `stringify!` so the table stays
/// in lockstep with the declarations.
pub struct DeclaredMember<T: 'static> {
    /// The identifier of the `static` item declaring the member.
    pub field_name: &'static str,
    /// The declared singleton.
    pub instance: &'static T,
}

/// Walks a type's declaration table and produces its discovered member list.
///
/// Runs exactly once per type, inside the registry's populate step. Each
/// member's field name is bound from its declaring identifier before the
/// list is returned, so the binding is published together with the list.
/// When every member carries ordering metadata the list is sorted by order
/// ascending (declaration order breaks ties); otherwise declaration order is
/// preserved.
pub(crate) fn discover<T: Enumeration>() -> Vec<&'static T> {
    let declared = T::declared_members();
    let mut members = Vec::with_capacity(declared.len());
    for declared_member in declared {
        declared_member
            .instance
            .core()
            .bind_field_name(declared_member.field_name);
        members.push(declared_member.instance);
    }

    if members.iter().all(|member| member.ordering().is_some()) {
        members.sort_by_key(|member| member.ordering().map(|ordering| ordering.order()));
    }

    members
}
