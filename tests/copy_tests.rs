//! Tests for copying, patching and mapping value objects.
//!
//! - `copy`: every own field duplicated
//! - `copy_with` / `copy_field`: named fields replaced, the rest untouched
//! - `map` / `map_with` / `map_field`: named fields transformed from their
//!   current value

#![cfg(feature = "derive")]

use copyable::{Copyable, Mapper, Patch};
use rstest::rstest;
use std::collections::BTreeMap;
use std::rc::Rc;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, Debug, Copyable)]
struct Test {
    num: i32,
}

#[derive(Clone, Debug, Copyable)]
struct Person {
    name: String,
    age: u32,
}

#[derive(Clone, Debug, Copyable)]
struct Holder {
    label: String,
    shared: Rc<BTreeMap<String, i32>>,
}

fn person() -> Person {
    Person {
        name: "John".to_string(),
        age: 25,
    }
}

// =============================================================================
// copy
// =============================================================================

#[test]
fn test_copy_equals_source() {
    let value = Test { num: 5 };
    let copy = value.copy();

    assert_eq!(copy.num, 5);
    assert!(copy.equals(Some(&value)));
    assert!(value.equals(Some(&copy)));
}

#[test]
fn test_copy_aliases_shared_structures() {
    let holder = Holder {
        label: "holder".to_string(),
        shared: Rc::new(BTreeMap::from([("a".to_string(), 5), ("b".to_string(), 6)])),
    };
    let copy = holder.copy();

    assert!(Rc::ptr_eq(&holder.shared, &copy.shared));
    assert!(copy.equals(Some(&holder)));
}

// =============================================================================
// copy_field / copy_with
// =============================================================================

#[rstest]
#[case(5, -5)]
#[case(5, 5)]
#[case(0, i32::MAX)]
fn test_copy_field_replaces_value(#[case] original: i32, #[case] replacement: i32) {
    let value = Test { num: original };
    let copy = value.copy_field(Test::num_field(), replacement);

    assert_eq!(copy.num, replacement);
    assert_eq!(value.num, original);
}

#[test]
fn test_copy_field_leaves_other_fields() {
    let original = person();
    let renamed = original.copy_field(Person::name_field(), "James".to_string());

    assert_eq!(renamed.name, "James");
    assert_eq!(renamed.age, 25);
    assert_eq!(original.name, "John");
}

#[test]
fn test_copy_with_replaces_every_patched_field() {
    let original = person();
    let patch = Patch::new()
        .set(Person::name_field(), "James".to_string())
        .set(Person::age_field(), 20);

    let copy = original.copy_with(patch);

    assert_eq!(copy.name, "James");
    assert_eq!(copy.age, 20);
    assert_eq!(original.age, 25);
}

#[test]
fn test_copy_with_later_entry_wins() {
    let patch = Patch::new()
        .set(Test::num_field(), 1)
        .set(Test::num_field(), 2);

    assert_eq!(Test { num: 0 }.copy_with(patch).num, 2);
}

#[test]
fn test_copy_with_empty_patch_is_copy() {
    let original = person();
    let copy = original.copy_with(Patch::new());

    assert!(copy.equals(Some(&original)));
}

#[test]
fn test_copy_with_replaces_shared_structure() {
    let holder = Holder {
        label: "holder".to_string(),
        shared: Rc::new(BTreeMap::new()),
    };
    let replacement = Rc::new(BTreeMap::from([("c".to_string(), 7)]));

    let copy = holder.copy_field(Holder::shared_field(), Rc::clone(&replacement));

    assert!(Rc::ptr_eq(&copy.shared, &replacement));
    assert!(!copy.equals(Some(&holder)));
}

// =============================================================================
// map / map_with / map_field
// =============================================================================

#[test]
fn test_map_without_transforms_equals_source() {
    let value = Test { num: 5 };
    assert!(value.map().equals(Some(&value)));
}

#[rstest]
#[case(5, 10)]
#[case(-3, -6)]
#[case(0, 0)]
fn test_map_field_doubles(#[case] original: i32, #[case] expected: i32) {
    let value = Test { num: original };
    let mapped = value.map_field(Test::num_field(), |num| num * 2);

    assert_eq!(mapped.num, expected);
    assert_eq!(value.num, original);
}

#[test]
fn test_map_with_transforms_named_fields() {
    let original = person();
    let older = original.map_with(
        Mapper::new()
            .update(Person::name_field(), |name| format!("Older {name}"))
            .update(Person::age_field(), |age| age + 20),
    );

    assert_eq!(older.name, "Older John");
    assert_eq!(older.age, 45);
    assert_eq!(original.name, "John");
    assert_eq!(original.age, 25);
}

#[test]
fn test_map_with_leaves_unmapped_fields() {
    let original = person();
    let mapped = original.map_with(Mapper::new().update(Person::age_field(), |age| age + 1));

    assert_eq!(mapped.name, original.name);
    assert_eq!(mapped.age, 26);
}

#[test]
fn test_map_with_chained_transforms_see_previous_result() {
    let mapper = Mapper::new()
        .update(Test::num_field(), |num| num + 1)
        .update(Test::num_field(), |num| num * 10);

    assert_eq!(Test { num: 1 }.map_with(mapper).num, 20);
}
