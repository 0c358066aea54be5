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

//! A module containing [`Interval`], the [`InclusiveInterval`] trait and
//! various constructor functions.

use thiserror::Error;

use crate::utils::span;
use crate::PointType;

/// The interval type used throughout this crate both for the examples and
/// for use by library users if they don't wish to create their own
/// interval types.
///
/// Both ends are included and `start <= end` always holds, the
/// constructors refuse anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<I> {
	pub(crate) start: I,
	pub(crate) end: I,
}

/// The error returned by [`Interval::try_new()`] when the given start is
/// after the given end.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("the start of an interval must not be greater than its end")]
pub struct InvalidIntervalError;

impl<I> Interval<I>
where
	I: PointType,
{
	/// Makes a new interval containing every point from `start` to `end`
	/// inclusive.
	///
	/// # Panics
	///
	/// Panics if `start > end`. See [`Interval::try_new()`] for a
	/// non-panicking version.
	///
	/// # Examples
	/// ```
	/// use diet::{InclusiveInterval, Interval};
	///
	/// let interval = Interval::new(4, 8);
	///
	/// assert_eq!(interval.start(), 4);
	/// assert_eq!(interval.end(), 8);
	/// assert_eq!(interval.size(), 5);
	/// ```
	pub fn new(start: I, end: I) -> Self {
		match Interval::try_new(start, end) {
			Ok(interval) => interval,
			Err(error) => panic!("{error}"),
		}
	}

	/// Makes a new interval containing every point from `start` to `end`
	/// inclusive, or returns an [`InvalidIntervalError`] if `start > end`.
	///
	/// # Examples
	/// ```
	/// use diet::{Interval, InvalidIntervalError};
	///
	/// assert!(Interval::try_new(1, 1).is_ok());
	/// assert_eq!(Interval::try_new(2, 1), Err(InvalidIntervalError));
	/// ```
	pub fn try_new(start: I, end: I) -> Result<Self, InvalidIntervalError> {
		if start <= end {
			Ok(Interval { start, end })
		} else {
			Err(InvalidIntervalError)
		}
	}
}

/// An interval that has **Inclusive** end-points.
///
/// Only [`InclusiveInterval::start()`] and [`InclusiveInterval::end()`]
/// need implementing, every other method is derived from them. A
/// [`Diet`](crate::Diet) only ever composes intervals through these
/// methods and through [`From<Interval<I>>`].
pub trait InclusiveInterval<I> {
	/// The start of the interval, inclusive.
	fn start(&self) -> I;
	/// The end of the interval, inclusive.
	fn end(&self) -> I;

	/// Does the interval contain the given point?
	fn contains_point(&self, point: I) -> bool
	where
		I: PointType,
	{
		point >= self.start() && point <= self.end()
	}

	/// Does the interval wholly contain the other interval?
	fn contains(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.start() <= other.start() && other.end() <= self.end()
	}

	/// Is the interval is valid, which according to this crate means
	/// `start()` <= `end()`
	fn is_valid(&self) -> bool
	where
		I: PointType,
	{
		self.start() <= self.end()
	}

	/// Is the whole interval before the other one, without overlapping it?
	fn less_than(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.end() < other.start()
	}

	/// Is the whole interval after the other one, without overlapping it?
	fn greater_than(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.start() > other.end()
	}

	/// Is there a point contained by both intervals?
	fn overlaps(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.start() <= other.end() && other.start() <= self.end()
	}

	/// Does the interval overlap the other one and start before it?
	fn starts_before(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.start() < other.start() && self.overlaps(other)
	}

	/// Does the interval overlap the other one and end after it?
	fn ends_after(&self, other: &Self) -> bool
	where
		I: PointType,
	{
		self.end() > other.end() && self.overlaps(other)
	}

	/// Are the two intervals disjoint with exactly `gap` between their
	/// closest end-points?
	///
	/// With a `gap` of `1` this is the "touching" test: no point lies
	/// between the two intervals so their union is itself an interval.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::InclusiveInterval;
	///
	/// assert!(ii(1, 4).adjacent(&ii(5, 8), 1));
	/// assert!(ii(5, 8).adjacent(&ii(1, 4), 1));
	/// assert!(ii(1, 3).adjacent(&ii(5, 8), 2));
	/// assert!(!ii(1, 5).adjacent(&ii(5, 8), 1));
	/// ```
	fn adjacent(&self, other: &Self, gap: u128) -> bool
	where
		I: PointType,
	{
		if self.less_than(other) {
			other.start().ordinal() - self.end().ordinal() == gap
		} else if self.greater_than(other) {
			self.start().ordinal() - other.end().ordinal() == gap
		} else {
			false
		}
	}

	/// The smallest interval covering both intervals.
	fn extend(&self, other: &Self) -> Self
	where
		I: PointType,
		Self: From<Interval<I>>,
	{
		Self::from(Interval {
			start: I::min(self.start(), other.start()),
			end: I::max(self.end(), other.end()),
		})
	}

	/// The number of points contained by the interval.
	fn size(&self) -> u128
	where
		I: PointType,
	{
		span(self.start(), self.end())
	}
}

impl<I> InclusiveInterval<I> for Interval<I>
where
	I: Copy,
{
	fn start(&self) -> I {
		self.start
	}

	fn end(&self) -> I {
		self.end
	}
}

/// An unbounded-unbounded interval
pub fn uu<I>() -> Interval<I>
where
	I: PointType,
{
	Interval {
		start: I::MIN,
		end: I::MAX,
	}
}
/// An unbounded-included interval
pub fn ui<I>(x: I) -> Interval<I>
where
	I: PointType,
{
	Interval {
		start: I::MIN,
		end: x,
	}
}
/// An included-unbounded interval
pub fn iu<I>(x: I) -> Interval<I>
where
	I: PointType,
{
	Interval {
		start: x,
		end: I::MAX,
	}
}
/// An included-included interval
///
/// # Panics
///
/// Panics if `x1 > x2`.
pub fn ii<I>(x1: I, x2: I) -> Interval<I>
where
	I: PointType,
{
	Interval::new(x1, x2)
}
/// An included-excluded interval
///
/// # Panics
///
/// Panics if the interval would contain no points.
pub fn ie<I>(x1: I, x2: I) -> Interval<I>
where
	I: PointType,
{
	match x2.down() {
		Some(end) => Interval::new(x1, end),
		None => panic!("{}", InvalidIntervalError),
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{Interval, PointType};

	impl<I> Serialize for Interval<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			(&self.start, &self.end).serialize(serializer)
		}
	}

	impl<'de, I> Deserialize<'de> for Interval<I>
	where
		I: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let (start, end) = <(I, I)>::deserialize(deserializer)?;
			Interval::try_new(start, end).map_err(serde::de::Error::custom)
		}
	}
}
