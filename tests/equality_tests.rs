//! Tests for structural equality.

#![cfg(feature = "derive")]

use copyable::Copyable;
use rstest::rstest;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

#[derive(Clone, Debug, Copyable)]
struct Inner {
    bool: bool,
    str: String,
}

#[derive(Clone, Debug, Copyable)]
struct Outer {
    num: i32,
    inner: Inner,
}

#[derive(Clone, Debug, Copyable)]
struct Maybe {
    value: Option<i32>,
}

#[derive(Clone, Debug, Copyable)]
struct Measure {
    value: f64,
}

#[derive(Clone, Debug, Copyable)]
struct Shared {
    local: Rc<BTreeMap<String, i32>>,
    remote: Arc<BTreeMap<String, String>>,
}

fn outer(num: i32, bool: bool, str: &str) -> Outer {
    Outer {
        num,
        inner: Inner {
            bool,
            str: str.to_string(),
        },
    }
}

#[test]
fn test_equals_itself() {
    let value = outer(10, true, "hello world");
    assert!(value.equals(Some(&value)));
}

#[test]
fn test_never_equals_none() {
    let value = outer(10, true, "hello world");
    assert!(!value.equals(None));
}

#[test]
fn test_independent_instances_are_equal() {
    let left = outer(10, true, "hello world");
    let right = outer(10, true, "hello world");

    assert!(left.equals(Some(&right)));
    assert!(right.equals(Some(&left)));
}

#[rstest]
#[case(outer(11, true, "hello world"))]
#[case(outer(10, false, "hello world"))]
#[case(outer(10, true, "hello"))]
fn test_any_changed_field_breaks_equality(#[case] changed: Outer) {
    let value = outer(10, true, "hello world");

    assert!(!value.equals(Some(&changed)));
    assert!(!changed.equals(Some(&value)));
}

#[test]
fn test_nested_change_through_copy() {
    let value = outer(10, true, "hello world");
    let inner = value.inner.copy_field(Inner::bool_field(), false);
    let changed = value.copy_field(Outer::inner_field(), inner);

    assert!(!value.equals(Some(&changed)));
    assert!(value.equals(Some(&value.copy())));
}

#[rstest]
#[case(None, None, true)]
#[case(Some(1), Some(1), true)]
#[case(Some(1), Some(2), false)]
#[case(Some(1), None, false)]
#[case(None, Some(1), false)]
fn test_optional_fields(
    #[case] left: Option<i32>,
    #[case] right: Option<i32>,
    #[case] expected: bool,
) {
    let left = Maybe { value: left };
    let right = Maybe { value: right };

    assert_eq!(left.equals(Some(&right)), expected);
}

#[test]
fn test_nan_field_is_only_equal_to_the_same_instance() {
    let value = Measure { value: f64::NAN };

    assert!(value.equals(Some(&value)));
    assert!(!value.equals(Some(&value.copy())));
}

#[test]
fn test_shared_structures_compare_by_identity() {
    let local = Rc::new(BTreeMap::from([("a".to_string(), 5)]));
    let remote = Arc::new(BTreeMap::from([("b".to_string(), "six".to_string())]));
    let value = Shared {
        local: Rc::clone(&local),
        remote: Arc::clone(&remote),
    };

    let aliased = Shared {
        local: Rc::clone(&local),
        remote: Arc::clone(&remote),
    };
    let rebuilt = Shared {
        local: Rc::new((*local).clone()),
        remote: Arc::clone(&remote),
    };

    assert!(value.equals(Some(&aliased)));
    assert!(!value.equals(Some(&rebuilt)));
}
