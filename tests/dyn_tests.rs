//! Tests for the dynamic side of value objects: patches addressed by field
//! name and boxed value objects of any concrete type.

#![cfg(feature = "derive")]

use copyable::{AnyCopyable, Copyable, DynPatch, PatchError};
use rstest::rstest;

#[derive(Clone, Debug, Copyable)]
struct Book {
    title: String,
    pages: u32,
}

#[derive(Clone, Debug, Copyable)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, Debug, Copyable)]
struct Labelled {
    #[copyable(rename = "label")]
    name: String,
    x: i32,
}

#[derive(Clone, Debug, Copyable)]
struct Slot {
    item: Box<dyn AnyCopyable>,
}

fn book() -> Book {
    Book {
        title: "TypeScript Deep Dive".to_string(),
        pages: 300,
    }
}

// =============================================================================
// DynPatch
// =============================================================================

#[test]
fn test_dyn_patch_assigns_by_name() {
    let patch = DynPatch::new()
        .set("title", "Rust in Action".to_string())
        .set("pages", 450_u32);

    let copy = book().try_copy_dyn(patch).unwrap();

    assert_eq!(copy.title, "Rust in Action");
    assert_eq!(copy.pages, 450);
}

#[test]
fn test_unknown_field_is_reported() {
    let error = book()
        .try_copy_dyn(DynPatch::new().set("author", "Basarat".to_string()))
        .unwrap_err();

    assert_eq!(
        error,
        PatchError::UnknownField {
            type_name: "Book",
            field: "author".to_string(),
        }
    );
    assert_eq!(error.to_string(), "Book has no own field `author`");
}

#[rstest]
#[case(DynPatch::new().set("pages", 450_i64), "pages", "u32")]
#[case(DynPatch::new().set("pages", "many"), "pages", "u32")]
#[case(DynPatch::new().set("title", "static text"), "title", "alloc::string::String")]
fn test_mistyped_value_is_reported(
    #[case] patch: DynPatch,
    #[case] field: &str,
    #[case] expected: &str,
) {
    let error = book().try_copy_dyn(patch).unwrap_err();

    match error {
        PatchError::TypeMismatch {
            type_name,
            field: actual,
            expected: actual_expected,
        } => {
            assert_eq!(type_name, "Book");
            assert_eq!(actual, field);
            assert_eq!(actual_expected, expected);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_failed_patch_leaves_source_untouched() {
    let original = book();
    let patch = DynPatch::new()
        .set("pages", 1_u32)
        .set("missing", 0);

    assert!(original.try_copy_dyn(patch).is_err());
    assert_eq!(original.pages, 300);
}

#[test]
fn test_renamed_field_is_patched_by_its_new_name() {
    let value = Labelled {
        name: "origin".to_string(),
        x: 0,
    };

    let copy = value
        .try_copy_dyn(DynPatch::new().set("label", "moved".to_string()))
        .unwrap();
    assert_eq!(copy.name, "moved");

    let error = value
        .try_copy_dyn(DynPatch::new().set("name", "moved".to_string()))
        .unwrap_err();
    assert_eq!(error.field(), "name");
}

// =============================================================================
// Box<dyn AnyCopyable>
// =============================================================================

#[test]
fn test_boxed_clone_keeps_concrete_type() {
    let boxed: Box<dyn AnyCopyable> = Box::new(Point { x: 1, y: 2 });
    let copy = boxed.clone();

    assert!(copy.is::<Point>());
    assert!(!copy.is::<Book>());
    assert_eq!(copy.downcast_ref::<Point>().map(|point| point.x), Some(1));
    assert!(copy.equals(Some(&*boxed)));
    assert!(!copy.equals(None));
}

#[test]
fn test_boxed_dyn_patch_keeps_concrete_type() {
    let boxed: Box<dyn AnyCopyable> = Box::new(Point { x: 1, y: 2 });
    let moved = boxed.try_copy_dyn(DynPatch::new().set("y", 20)).unwrap();

    assert_eq!(moved.downcast_ref::<Point>().map(|point| point.y), Some(20));
    assert!(!moved.equals(Some(&*boxed)));
}

#[test]
fn test_receiver_driven_equality_across_types() {
    let point: Box<dyn AnyCopyable> = Box::new(Point { x: 3, y: 4 });
    let labelled: Box<dyn AnyCopyable> = Box::new(Labelled {
        name: "p".to_string(),
        x: 3,
    });

    // `Labelled` has no `y`; `Point` has no `label`.
    assert!(!point.equals(Some(&*labelled)));
    assert!(!labelled.equals(Some(&*point)));

    let only_x: Box<dyn AnyCopyable> = Box::new(OnlyX { x: 3 });
    assert!(only_x.equals(Some(&*point)));
    assert!(!point.equals(Some(&*only_x)));
}

#[derive(Clone, Debug, Copyable)]
struct OnlyX {
    x: i32,
}

#[test]
fn test_boxed_fields_compare_structurally() {
    let left = Slot {
        item: Box::new(Point { x: 1, y: 2 }),
    };
    let right = Slot {
        item: Box::new(Point { x: 1, y: 2 }),
    };
    let other = Slot {
        item: Box::new(Point { x: 1, y: 3 }),
    };

    assert!(left.equals(Some(&right)));
    assert!(!left.equals(Some(&other)));
    assert_eq!(left.copy().to_string(), "Slot(\n  item=Point(\n    x=1,\n    y=2\n  )\n)");
}

#[test]
fn test_value_object_field_matches_other_type_by_fields() {
    let typed = OnlyX { x: 3 };
    let slot = Slot {
        item: Box::new(OnlyX { x: 3 }),
    };

    assert!(copyable::Property::same_as(&typed, &slot.item));
}
