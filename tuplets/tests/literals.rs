//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use std::collections::{BTreeMap, HashMap, HashSet};
use std::rc::Rc;

use tuplets::{MutablePair, MutableTriple, Pairing};

#[test]
fn map_literals() {
    let map: HashMap<&str, u32> = ["one".to(1), "two".to(2), "three".to(3)]
        .into_iter()
        .map(Into::into)
        .collect();
    assert_eq!(map.len(), 3);
    assert_eq!(map["three"], 3);

    let sorted: BTreeMap<u8, char> = [2u8.to('b'), 1u8.to('a')]
        .into_iter()
        .map(MutablePair::into_tuple)
        .collect();
    assert_eq!(sorted.into_iter().next(), Some((1, 'a')));
}

#[test]
fn pairs_as_keys() {
    let mut set = HashSet::new();
    assert!(set.insert(MutablePair::new(1, "a")));
    assert!(!set.insert(1i32.to("a")));
    assert!(set.insert(MutablePair::new(1, "b")));
    assert_eq!(set.len(), 2);

    let mut key = MutableTriple::new(0u8, 0u8, 0u8);
    let mut seen = HashSet::new();
    for i in 0..4 {
        key.third = i % 2;
        seen.insert(key);
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn shared_values_are_not_owned() {
    let name = Rc::new(String::from("shared"));
    let mut p = MutablePair::new(Rc::clone(&name), 0usize);
    assert_eq!(Rc::strong_count(&name), 2);
    p.second = p.first.len();
    assert_eq!(p.to_string(), "(shared, 6)");
    drop(p);
    assert_eq!(Rc::strong_count(&name), 1);
    assert_eq!(*name, "shared");

    let mut t = MutableTriple::new(Rc::clone(&name), Rc::clone(&name), 0u8);
    assert_eq!(Rc::strong_count(&name), 3);
    t.second = Rc::new(String::from("other"));
    assert_eq!(Rc::strong_count(&name), 2);
    drop(t);
    assert_eq!(Rc::strong_count(&name), 1);
}

#[cfg(feature = "serde")]
#[test]
fn serde_structural() {
    let p = MutablePair::new(1, "a");
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, r#"{"first":1,"second":"a"}"#);
    let back: MutablePair<i32, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, MutablePair::new(1, String::from("a")));

    let t: MutableTriple<u8, bool, Option<u8>> =
        serde_json::from_str(r#"{"first":1,"second":true,"third":null}"#).unwrap();
    assert_eq!(t, MutableTriple::new(1, true, None));
}
