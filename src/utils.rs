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

use crate::{DiscreteFinite, InclusiveInterval, PointType};

/// The number of points from `start` to `end` inclusive.
///
/// Requires `start <= end`.
pub(crate) fn span<I>(start: I, end: I) -> u128
where
	I: DiscreteFinite,
{
	end.ordinal() - start.ordinal() + 1
}

pub(crate) fn invalid_interval_panic<Q, I>(interval: &Q)
where
	I: PointType,
	Q: InclusiveInterval<I>,
{
	if !interval.is_valid() {
		panic!(
			"invalid interval given to function see here for more details: https://docs.rs/diet/latest/diet/#invalid-intervals"
		);
	}
}

/// Whether `a` and `b` can be stored as a single interval, that is they
/// overlap or nothing lies between them.
pub(crate) fn mergeable<I, K>(a: &K, b: &K) -> bool
where
	I: PointType,
	K: InclusiveInterval<I>,
{
	a.overlaps(b) || a.adjacent(b, 1)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::interval::ii;

	#[test]
	fn span_tests() {
		assert_eq!(span(4, 4), 1);
		assert_eq!(span(-3, 3), 7);
		assert_eq!(span(u8::MIN, u8::MAX), 256);
		assert_eq!(span(i64::MIN, i64::MAX), 1 << 64);
	}

	#[test]
	fn mergeable_tests() {
		assert!(mergeable(&ii(1, 4), &ii(5, 8)));
		assert!(mergeable(&ii(1, 5), &ii(5, 8)));
		assert!(mergeable(&ii(1, 10), &ii(5, 8)));
		assert!(!mergeable(&ii(1, 3), &ii(5, 8)));
	}

	#[test]
	#[should_panic]
	fn invalid_interval_panic_tests() {
		invalid_interval_panic(&crate::Interval { start: 5, end: 1 });
	}
}
