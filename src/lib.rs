/*
Copyright 2022,2023 James Forster

This file is part of diet.

diet is free software: you can redistribute it and/or
modify it under the terms of the GNU Affero General Public License as
published by the Free Software Foundation, either version 3 of the
License, or (at your option) any later version.

diet is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with diet. If not, see <https://www.gnu.org/licenses/>.
*/

//! This crate provides [`Diet`], a Discrete Interval Encoding Tree: a
//! binary tree which stores a set of discrete points as a collection of
//! maximal, disjoint, non-touching [`Interval`]s.
//!
//! A set of a million consecutive ids costs one node, so the memory used
//! depends on the number of disjoint ranges in the set and not on the
//! number of points. This makes it a good fit for large, sparse sets of
//! integers such as ranges of ids, timestamps or ports.
//!
//! ## Example
//!
//! ```rust
//! use diet::interval::ii;
//! use diet::Diet;
//!
//! let mut diet = Diet::new();
//!
//! diet.insert(ii(1, 5));
//! diet.insert(ii(10, 15));
//!
//! assert_eq!(diet.intersection(ii(3, 12)), 6);
//! assert_eq!(diet.contains(ii(1, 5)), true);
//! assert_eq!(diet.contains(ii(1, 6)), false);
//! assert_eq!(diet.total(), 11);
//!
//! // touching intervals are merged
//! diet.insert(ii(6, 9));
//! assert_eq!(diet.len(), 1);
//! ```
//!
//! ## Example using a custom interval type
//!
//! ```rust
//! use diet::interval::ii;
//! use diet::{Diet, InclusiveInterval, Interval};
//!
//! #[derive(Debug, Copy, Clone, PartialEq)]
//! struct Ports {
//! 	first: u16,
//! 	last: u16,
//! }
//!
//! // First, we need to implement InclusiveInterval
//! impl InclusiveInterval<u16> for Ports {
//! 	fn start(&self) -> u16 {
//! 		self.first
//! 	}
//! 	fn end(&self) -> u16 {
//! 		self.last
//! 	}
//! }
//!
//! // Second, we need to implement From<Interval<u16>>
//! impl From<Interval<u16>> for Ports {
//! 	fn from(interval: Interval<u16>) -> Self {
//! 		Ports {
//! 			first: interval.start(),
//! 			last: interval.end(),
//! 		}
//! 	}
//! }
//!
//! let mut open: Diet<u16, Ports> = Diet::new();
//!
//! open.insert(Ports { first: 8000, last: 8080 });
//! open.insert(Ports { first: 8081, last: 8090 });
//!
//! assert_eq!(open.first(), Some(&Ports { first: 8000, last: 8090 }));
//! assert_eq!(open.contains(ii(8080, 8081)), true);
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Discrete-ness
//!
//! This crate is designed to work with [`Discrete`] types as compared to
//! [`Continuous`] types. For example `5..=6` touches `7..=8` since integers
//! are `Discrete` and so the two are merged into `5..=8` when both are
//! inserted into a [`Diet`].
//!
//! ### Finite-ness
//!
//! This crate is also designed to work with [`Finite`] types, every point
//! type implements [`DiscreteFinite`]. All counts returned by a [`Diet`]
//! are `u128` so they are exact even for an interval covering every `i64`.
//!
//! ### Invalid Intervals
//!
//! Within this crate, not all intervals are considered valid intervals.
//! An interval is only valid if its start is not greater than its end.
//! [`Interval::new()`] refuses to build invalid intervals and every method
//! of [`Diet`] panics if given one through a custom interval type.
//!
//! | interval | valid |
//! | -------- | ----- |
//! | 0..=0    | YES   |
//! | 0..=1    | YES   |
//! | 9..=8    | NO    |
//!
//! ### Touching
//!
//! Two intervals are "touching" if they do not overlap and there exists no
//! value between them, in other words they are adjacent with a gap of
//! exactly one (see [`InclusiveInterval::adjacent()`]).
//!
//! ### Balancing
//!
//! Insertion does not rebalance the tree, inserting in sorted order builds
//! a list-shaped tree. [`Diet::balance()`] rebuilds a tree of minimal height
//! in linear time with constant extra memory using the Day-Stout-Warren
//! algorithm, call it after a batch of insertions.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Interval`] as a
//!   `(start, end)` pair.
//!
//! [`discrete`]: https://en.wikipedia.org/wiki/Discrete_mathematics
//! [`continuous`]: https://en.wikipedia.org/wiki/List_of_continuity-related_mathematical_topics
//! [`finite`]: https://en.wiktionary.org/wiki/finite#Adjective

#![no_std]
#![allow(clippy::tabs_in_doc_comments)]

extern crate alloc;

pub(crate) mod utils;

pub mod discrete_finite;
pub mod interval;

pub mod diet;

pub use crate::diet::{Diet, IntervalType, Iter, PointType};
pub use crate::discrete_finite::DiscreteFinite;
pub use crate::interval::{InclusiveInterval, Interval, InvalidIntervalError};
