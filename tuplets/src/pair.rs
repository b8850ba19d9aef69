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

use core::fmt::{Display, Formatter};

/// A pair of values with no meaning attached to either of them.
///
/// Both fields are public and may be reassigned independently. Two pairs are equal if both of their
/// components are equal.
///
/// ```
/// use tuplets::MutablePair;
///
/// let mut pair = MutablePair::new(1, 2);
/// pair.first = 9;
/// assert_eq!(pair, MutablePair::new(9, 2));
/// let MutablePair { first, second } = pair;
/// assert_eq!((first, second), (9, 2));
/// ```
#[cfg_attr(feature = "stabby", stabby::stabby)]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutablePair<A, B> {
    /// The first value.
    pub first: A,
    /// The second value.
    pub second: B,
}

/// Constructs a [`MutablePair`] from `first` and `second`.
pub const fn pair<A, B>(first: A, second: B) -> MutablePair<A, B> {
    MutablePair::new(first, second)
}

impl<A, B> MutablePair<A, B> {
    /// Constructs a new pair.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
    /// Returns a pair of references to the fields.
    pub const fn as_ref(&self) -> MutablePair<&A, &B> {
        MutablePair::new(&self.first, &self.second)
    }
    /// Returns a pair of mutable references to the fields.
    pub fn as_mut(&mut self) -> MutablePair<&mut A, &mut B> {
        MutablePair::new(&mut self.first, &mut self.second)
    }
    /// Stores `value` as [`Self::first`], returning the value it replaced.
    #[rustversion::attr(since(1.83), const)]
    pub fn replace_first(&mut self, value: A) -> A {
        core::mem::replace(&mut self.first, value)
    }
    /// Stores `value` as [`Self::second`], returning the value it replaced.
    #[rustversion::attr(since(1.83), const)]
    pub fn replace_second(&mut self, value: B) -> B {
        core::mem::replace(&mut self.second, value)
    }
    /// Exchanges the fields.
    pub fn swap(self) -> MutablePair<B, A> {
        MutablePair::new(self.second, self.first)
    }
    /// Converts `self` into a native tuple.
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T> MutablePair<T, T> {
    /// Converts a pair whose fields share a type into `[first, second]`.
    pub fn into_array(self) -> [T; 2] {
        [self.first, self.second]
    }
    /// Collects `[first, second]` into a vector.
    #[cfg(feature = "alloc")]
    pub fn into_vec(self) -> alloc::vec::Vec<T> {
        self.into_array().into()
    }
    /// Clones the fields into `[first, second]`.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        alloc::vec![self.first.clone(), self.second.clone()]
    }
}

impl<A: Display, B: Display> Display for MutablePair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for MutablePair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}
impl<A, B> From<MutablePair<A, B>> for (A, B) {
    fn from(value: MutablePair<A, B>) -> Self {
        value.into_tuple()
    }
}
impl<T> From<MutablePair<T, T>> for [T; 2] {
    fn from(value: MutablePair<T, T>) -> Self {
        value.into_array()
    }
}
impl<T> IntoIterator for MutablePair<T, T> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, 2>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_array().into_iter()
    }
}

/// Infix construction of [`MutablePair`]s, implemented for every sized type.
///
/// Handy when building maps out of many entries:
/// ```
/// use std::collections::HashMap;
/// use tuplets::Pairing;
///
/// let map: HashMap<&str, u32> = ["one".to(1), "two".to(2)]
///     .into_iter()
///     .map(Into::into)
///     .collect();
/// assert_eq!(map["two"], 2);
/// ```
pub trait Pairing: Sized {
    /// Pairs `self` with `that`, equivalent to `MutablePair::new(self, that)`.
    fn to<B>(self, that: B) -> MutablePair<Self, B> {
        MutablePair::new(self, that)
    }
}
impl<T> Pairing for T {}
