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

/// A triad of values, the three-field sibling of [`crate::MutablePair`].
///
/// Two triples are equal if all three components are equal.
#[cfg_attr(feature = "stabby", stabby::stabby)]
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutableTriple<A, B, C> {
    /// The first value.
    pub first: A,
    /// The second value.
    pub second: B,
    /// The third value.
    pub third: C,
}

/// Constructs a [`MutableTriple`] from its three values.
pub const fn triple<A, B, C>(first: A, second: B, third: C) -> MutableTriple<A, B, C> {
    MutableTriple::new(first, second, third)
}

impl<A, B, C> MutableTriple<A, B, C> {
    /// Constructs a new triple.
    pub const fn new(first: A, second: B, third: C) -> Self {
        Self {
            first,
            second,
            third,
        }
    }
    /// Returns a triple of references to the fields.
    pub const fn as_ref(&self) -> MutableTriple<&A, &B, &C> {
        MutableTriple::new(&self.first, &self.second, &self.third)
    }
    /// Returns a triple of mutable references to the fields.
    pub fn as_mut(&mut self) -> MutableTriple<&mut A, &mut B, &mut C> {
        MutableTriple::new(&mut self.first, &mut self.second, &mut self.third)
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
    /// Stores `value` as [`Self::third`], returning the value it replaced.
    #[rustversion::attr(since(1.83), const)]
    pub fn replace_third(&mut self, value: C) -> C {
        core::mem::replace(&mut self.third, value)
    }
    /// Converts `self` into a native tuple.
    pub fn into_tuple(self) -> (A, B, C) {
        (self.first, self.second, self.third)
    }
}

impl<T> MutableTriple<T, T, T> {
    /// Converts a triple whose fields share a type into `[first, second, third]`.
    pub fn into_array(self) -> [T; 3] {
        [self.first, self.second, self.third]
    }
    /// Collects `[first, second, third]` into a vector.
    #[cfg(feature = "alloc")]
    pub fn into_vec(self) -> alloc::vec::Vec<T> {
        self.into_array().into()
    }
    /// Clones the fields into `[first, second, third]`.
    #[cfg(feature = "alloc")]
    pub fn to_vec(&self) -> alloc::vec::Vec<T>
    where
        T: Clone,
    {
        alloc::vec![self.first.clone(), self.second.clone(), self.third.clone()]
    }
}

impl<A: Display, B: Display, C: Display> Display for MutableTriple<A, B, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.first, self.second, self.third)
    }
}

impl<A, B, C> From<(A, B, C)> for MutableTriple<A, B, C> {
    fn from((first, second, third): (A, B, C)) -> Self {
        Self::new(first, second, third)
    }
}
impl<A, B, C> From<MutableTriple<A, B, C>> for (A, B, C) {
    fn from(value: MutableTriple<A, B, C>) -> Self {
        value.into_tuple()
    }
}
impl<T> From<MutableTriple<T, T, T>> for [T; 3] {
    fn from(value: MutableTriple<T, T, T>) -> Self {
        value.into_array()
    }
}
impl<T> IntoIterator for MutableTriple<T, T, T> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, 3>;
    fn into_iter(self) -> Self::IntoIter {
        self.into_array().into_iter()
    }
}
