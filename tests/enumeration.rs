//! Integration tests for discovery, lookup, and the guess resolver.

use std::collections::HashSet;

use enumerations::{
    AnyEnumeration, Enumeration, EnumerationError, EnumerationType, GuessInput,
    OrderedEnumeration, enumeration, ordered_enumeration,
};

enumeration! {
    /// The classic three-member office roster.
    pub struct EmployeeType {
        MANAGER = (0, "Manager"),
        SERVANT = (1, "Servant"),
        ASSISTANT_TO_THE_REGIONAL_MANAGER = (2, "Assistant to the Regional Manager"),
    }
}

enumeration! {
    /// Shares a display name and a value with `EmployeeType` members, but is
    /// a different type and must never compare equal to them.
    pub struct Title {
        BOSS = (0, "Manager"),
    }
}

ordered_enumeration! {
    /// Log severities, ordered mildest-first regardless of value.
    pub struct Severity {
        ERROR = (0, "Error", order = 3),
        WARNING = (1, "Warning", order = 2),
        INFO = (2, "Info", order = 1),
        TRACE = (3, "Trace", order = 4, hidden),
    }
}

/// A family whose members carry payloads and per-member behavior, written
/// against the hand-implemented surface.
mod weapons {
    use enumerations::{
        AnyEnumeration, DeclaredMember, Enumeration, EnumerationCore, GuessInput,
        declared_members, impl_enumeration_ops,
    };

    pub struct Target {
        pub armored: bool,
    }

    trait DamageModel: Sync {
        fn is_sharp(&self) -> bool;
        fn damage(&self, weapon: &Weapon, target: &Target) -> i32;
    }

    pub struct Weapon {
        core: EnumerationCore,
        base_damage: i32,
        two_handed: bool,
        model: &'static dyn DamageModel,
        aliases: &'static [&'static str],
    }

    impl Weapon {
        pub fn two_handed(&self) -> bool {
            self.two_handed
        }

        pub fn is_sharp(&self) -> bool {
            self.model.is_sharp()
        }

        pub fn damage_against(&self, target: &Target) -> i32 {
            self.model.damage(self, target)
        }

        fn swing(&self) -> i32 {
            if self.two_handed {
                self.base_damage * 2
            } else {
                self.base_damage
            }
        }
    }

    /// Doubles against unarmored targets, nearly useless against armor.
    struct Sharp;

    impl DamageModel for Sharp {
        fn is_sharp(&self) -> bool {
            true
        }

        fn damage(&self, weapon: &Weapon, target: &Target) -> i32 {
            if target.armored {
                (weapon.swing() as f64 * 0.1).round() as i32
            } else {
                weapon.swing() * 2
            }
        }
    }

    /// Always lands some impact; armor only dampens it.
    struct Blunt;

    impl DamageModel for Blunt {
        fn is_sharp(&self) -> bool {
            false
        }

        fn damage(&self, weapon: &Weapon, target: &Target) -> i32 {
            let swing = if target.armored {
                (weapon.swing() as f64 * 0.8).round() as i32
            } else {
                weapon.swing()
            };
            3 + swing
        }
    }

    pub static GREAT_SWORD: Weapon = Weapon {
        core: EnumerationCore::with_static_name(0, "Great Sword"),
        base_damage: 10,
        two_handed: true,
        model: &Sharp,
        aliases: &["claymore"],
    };

    pub static SWORD: Weapon = Weapon {
        core: EnumerationCore::with_static_name(1, "Sword + Shield"),
        base_damage: 5,
        two_handed: false,
        model: &Sharp,
        aliases: &[],
    };

    pub static MACE: Weapon = Weapon {
        core: EnumerationCore::with_static_name(2, "Mace"),
        base_damage: 5,
        two_handed: false,
        model: &Blunt,
        aliases: &[],
    };

    impl AnyEnumeration for Weapon {
        fn core(&self) -> &EnumerationCore {
            &self.core
        }

        fn matches_guess(&self, input: &GuessInput<'_>) -> bool {
            match input {
                GuessInput::Text(text) => {
                    self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(text))
                }
                _ => false,
            }
        }
    }

    impl Enumeration for Weapon {
        fn declared_members() -> &'static [DeclaredMember<Self>] {
            declared_members!(Weapon: GREAT_SWORD, SWORD, MACE)
        }
    }

    impl_enumeration_ops!(Weapon);

    pub fn single_handed() -> Vec<&'static Weapon> {
        Weapon::get_all()
            .into_iter()
            .filter(|weapon| !weapon.two_handed())
            .collect()
    }
}

use weapons::{GREAT_SWORD, MACE, SWORD, Target, Weapon};

#[test]
fn get_all_returns_every_declared_member() {
    assert_eq!(EmployeeType::get_all().len(), 3);
    assert_eq!(Title::get_all().len(), 1);
    assert_eq!(Weapon::get_all().len(), 3);
}

#[test]
fn get_all_is_stable_across_calls() {
    let first = EmployeeType::get_all();
    let second = EmployeeType::get_all();
    assert_eq!(first, second);

    let values: Vec<i32> = first.iter().map(|member| member.value()).collect();
    assert_eq!(values, [0, 1, 2]);
}

#[test]
fn discovered_members_round_trip() {
    for member in EmployeeType::get_all_with_hidden() {
        let by_value = EmployeeType::from_value(member.value()).unwrap();
        assert!(std::ptr::eq(*member, by_value));

        let field_name = member.field_name().expect("bound at discovery");
        let by_field = EmployeeType::from_field_name(field_name).unwrap();
        assert!(std::ptr::eq(*member, by_field));

        let by_display = EmployeeType::from_display_name(member.display_name()).unwrap();
        assert!(std::ptr::eq(*member, by_display));
    }
}

#[test]
fn exact_lookups_report_not_found() {
    assert!(matches!(
        EmployeeType::from_value(5),
        Err(EnumerationError::NotFound { kind: "value", .. })
    ));
    assert!(matches!(
        EmployeeType::from_display_name("manager"),
        Err(EnumerationError::NotFound { kind: "display name", .. })
    ));
    assert!(matches!(
        EmployeeType::from_field_name("Overlord"),
        Err(EnumerationError::NotFound { kind: "field name", .. })
    ));
    assert!(matches!(
        Severity::from_order(99),
        Err(EnumerationError::NotFound { kind: "order", .. })
    ));
}

#[test]
fn display_name_lookup_is_case_sensitive_but_field_name_is_not() {
    assert!(EmployeeType::from_display_name("Servant").is_ok());
    assert!(EmployeeType::from_display_name("SERVANT").is_err());
    assert!(EmployeeType::from_field_name("SERVANT").is_ok());
    assert!(EmployeeType::from_field_name("servant").is_ok());
}

#[test]
fn guess_short_circuits_on_an_instance_of_the_target_type() {
    let manager = EmployeeType::from_value(0).unwrap();
    let again = EmployeeType::guess_from(GuessInput::instance(manager)).unwrap();
    assert!(std::ptr::eq(manager, again));
}

#[test]
fn guess_resolves_numbers_text_and_stripped_text() {
    assert_eq!(EmployeeType::guess_from(0).unwrap().display_name(), "Manager");
    assert_eq!(EmployeeType::guess_from(1.0).unwrap().value(), 1);
    assert_eq!(EmployeeType::guess_from("2").unwrap().value(), 2);
    assert_eq!(EmployeeType::guess_from("servant").unwrap().value(), 1);
    assert_eq!(
        EmployeeType::guess_from("AssistantToTheRegionalManager")
            .unwrap()
            .value(),
        2
    );
    assert_eq!(
        EmployeeType::guess_from("assistant_to_the_regional_manager")
            .unwrap()
            .value(),
        2
    );
}

#[test]
fn guess_consults_the_custom_hook_before_name_matching() {
    let claymore = Weapon::guess_from("claymore").unwrap();
    assert!(std::ptr::eq(claymore, &GREAT_SWORD));
    assert!(Weapon::guess_from("broadsword").is_err());
}

#[test]
fn guess_resolves_a_foreign_instance_through_its_display_name() {
    // Title::BOSS displays as "Manager"; guessed against EmployeeType it
    // lands on the member of the *target* type with that display name.
    let resolved = EmployeeType::guess_from(GuessInput::instance(&BOSS)).unwrap();
    assert!(std::ptr::eq(resolved, &MANAGER));
}

#[test]
fn guess_failures_surface_or_degrade_on_request() {
    assert!(matches!(
        EmployeeType::guess_from("Regional Celebrity"),
        Err(EnumerationError::NotFound { kind: "guess value", .. })
    ));
    assert_eq!(EmployeeType::try_guess_from("Regional Celebrity"), None);
    assert_eq!(
        EmployeeType::guess_from_opt(None::<GuessInput<'_>>),
        Ok(None)
    );
    assert_eq!(
        EmployeeType::guess_from_opt(Some("servant")).unwrap().map(|m| m.value()),
        Some(1)
    );
}

#[test]
fn equality_is_scoped_to_the_concrete_type() {
    let manager: &dyn AnyEnumeration = &MANAGER;
    let boss: &dyn AnyEnumeration = &BOSS;

    // Same value, same display name, different type: never equal.
    assert_eq!(manager.value(), boss.value());
    assert!(!manager.same_as(boss));
    assert!(manager.same_as(&MANAGER));
}

#[test]
fn mixed_types_coexist_in_hash_containers() {
    // MANAGER and BOSS hash identically (value-only hash) and rely on the
    // equality check to stay distinct.
    let mut set: HashSet<&dyn AnyEnumeration> = HashSet::new();
    set.insert(&MANAGER);
    set.insert(&BOSS);
    set.insert(&SERVANT);
    assert_eq!(set.len(), 3);
    assert!(set.contains(&(&MANAGER as &dyn AnyEnumeration)));
}

#[test]
fn is_any_of_matches_against_mixed_candidates() {
    assert!(SERVANT.is_any_of(&[&MANAGER, &SERVANT]));
    assert!(!SERVANT.is_any_of(&[&MANAGER, &BOSS]));
}

#[test]
fn ordered_listing_sorts_and_hides() {
    let listed: Vec<&str> = Severity::get_all()
        .into_iter()
        .map(|severity| severity.display_name())
        .collect();
    assert_eq!(listed, ["Info", "Warning", "Error"]);

    let full: Vec<&str> = Severity::get_all_with_hidden()
        .iter()
        .map(|severity| severity.display_name())
        .collect();
    assert_eq!(full, ["Info", "Warning", "Error", "Trace"]);
}

#[test]
fn hidden_members_resolve_through_every_direct_lookup() {
    assert_eq!(Severity::from_value(3).unwrap().display_name(), "Trace");
    assert_eq!(Severity::from_order(4).unwrap().value(), 3);
    assert_eq!(Severity::from_field_name("trace").unwrap().value(), 3);
    assert_eq!(Severity::guess_from("trace").unwrap().value(), 3);
}

#[test]
fn ordered_members_compare_by_order_key() {
    assert!(INFO < WARNING);
    assert!(WARNING < ERROR);
    assert!(ERROR < TRACE);
    assert_eq!(INFO.order(), 1);
    assert!(TRACE.hide_in_listing());
}

#[test]
fn members_carry_their_own_behavior() {
    let armored = Target { armored: true };
    let unarmored = Target { armored: false };

    assert!(GREAT_SWORD.is_sharp());
    assert!(!MACE.is_sharp());

    assert_eq!(GREAT_SWORD.damage_against(&unarmored), 40);
    assert_eq!(GREAT_SWORD.damage_against(&armored), 2);
    assert_eq!(SWORD.damage_against(&unarmored), 10);
    assert_eq!(MACE.damage_against(&unarmored), 8);
    assert_eq!(MACE.damage_against(&armored), 7);
}

#[test]
fn adapter_listings_filter_the_cached_members() {
    let one_handed: Vec<&str> = weapons::single_handed()
        .into_iter()
        .map(|weapon| weapon.display_name())
        .collect();
    assert_eq!(one_handed, ["Sword + Shield", "Mace"]);
}

#[test]
fn erased_tokens_mirror_the_typed_surface() {
    let token = EnumerationType::of::<Severity>();
    assert_eq!(token.get_all().len(), 3);
    assert_eq!(token.get_all_with_hidden().len(), 4);

    let trace = token.guess_from(Some(&GuessInput::from("trace"))).unwrap();
    assert_eq!(trace.value(), 3);
    assert!(token.owns(trace));
    assert!(!token.owns(&MANAGER));

    assert_eq!(
        token.guess_from(None),
        Err(EnumerationError::AbsentGuessInput)
    );
}

#[test]
fn display_and_projection_follow_the_member() {
    assert_eq!(MANAGER.to_string(), "Manager");
    assert_eq!(i32::from(&ASSISTANT_TO_THE_REGIONAL_MANAGER), 2);
    assert_eq!(SERVANT.unsigned_value(), 1);
    assert_eq!(SERVANT_VALUE, 1);
}
