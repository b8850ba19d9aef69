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

//! Mutable pairs and triples.
//!
//! [`MutablePair`] and [`MutableTriple`] are plain value holders: their fields are public and may be
//! reassigned at will, and equality, hashing and ordering are structural. They render as `(a, b)` and
//! `(a, b, c)` through [`core::fmt::Display`].
//!
//! ```
//! use tuplets::{MutablePair, Pairing};
//!
//! let mut pair = 1u8.to("one");
//! assert_eq!(pair, MutablePair::new(1, "one"));
//! pair.first = 2;
//! assert_eq!(pair.to_string(), "(2, one)");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(feature = "alloc")]
extern crate alloc;

mod pair;
pub use pair::{pair, MutablePair, Pairing};
mod triple;
pub use triple::{triple, MutableTriple};
