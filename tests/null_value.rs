use std::sync::Arc;

use null_object::{
    mk_runtime_value, stringify, truthy, values_equal, IntegerValue, Invokable, NullValue,
    StringValue,
};
use rand::prelude::*;

#[test]
fn obtain_returns_the_canonical_instance() {
    let first = NullValue::obtain();
    let second = NullValue::obtain();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(values_equal(&first, &second));
}

#[test]
fn unrecognized_operation_succeeds() {
    let null = NullValue::obtain();
    let result = null.invoke("frobnicate_xyz", vec![]).unwrap();

    assert!(values_equal(&result, &null));
}

#[test]
fn chained_operations_stay_null() {
    let result = NullValue::obtain()
        .invoke("x", vec![])
        .unwrap()
        .invoke("y", vec![])
        .unwrap();

    assert!(values_equal(&result, &NullValue::obtain()));
}

#[test]
fn random_operation_names_are_absorbed() {
    let letters: Vec<char> = ('a'..='z')
        .chain('A'..='Z')
        .chain(std::iter::once('_'))
        .collect();
    let mut rng = rand::thread_rng();
    let null = NullValue::obtain();

    for _ in 0..256 {
        let length = rng.gen_range(1..=24);
        let name: String = (0..length)
            .map(|_| *letters.choose(&mut rng).unwrap())
            .collect();

        let first = null.invoke(&name, vec![]).expect("first invocation failed");
        let second = null.invoke(&name, vec![]).expect("second invocation failed");

        assert!(values_equal(&first, &second));
        assert!(values_equal(&first, &null));
    }
}

#[test]
fn arguments_are_accepted_and_ignored() {
    let null = NullValue::obtain();
    let args = vec![
        mk_runtime_value(Box::new(IntegerValue::from(42))),
        mk_runtime_value(Box::new(StringValue::from("payload"))),
        NullValue::obtain(),
    ];

    let result = null.invoke("write", args).unwrap();
    assert!(values_equal(&result, &null));
}

#[test]
fn boolean_coercion_is_false() {
    assert!(!bool::from(NullValue::default()));
    assert!(!truthy(&NullValue::obtain()));

    if bool::from(NullValue::default()) {
        panic!("null must never be truthy");
    }
}

#[test]
fn numeric_coercion_is_zero() {
    assert_eq!(NullValue::default() + 5, 5);
    assert_eq!(3 + NullValue::default(), 3);
    assert_eq!(-NullValue::default() - 7, -7);
    assert_eq!(isize::from(NullValue::default()), 0);
}

#[test]
fn text_coercion_is_empty() {
    assert_eq!(format!("<<<{}>>>", NullValue::default()), "<<<>>>");
    assert_eq!(stringify(Box::new(NullValue::default())), "");
    assert_eq!(String::from(NullValue::default()), "");
}

#[test]
fn all_nulls_compare_equal() {
    assert_eq!(NullValue::default(), NullValue::default());

    // A fresh allocation is still equal to the canonical instance.
    let fresh = mk_runtime_value(Box::new(NullValue::default()));
    assert!(!Arc::ptr_eq(&fresh, &NullValue::obtain()));
    assert!(values_equal(&fresh, &NullValue::obtain()));
}
