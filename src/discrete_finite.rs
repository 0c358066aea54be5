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

//! A module containing the [`DiscreteFinite`] trait and trait impls for the
//! primitive integer datatypes up to 64 bits wide.

/// A trait for things which are both discrete and finite datatypes. See the
/// top-level module documentation for more detailed descriptions on
/// discrete-ness and finite-ness.
pub trait DiscreteFinite {
	/// The minimum value of the type.
	const MIN: Self;
	/// The maximum value of the type.
	const MAX: Self;

	/// The smallest value greater than `self` if one exists.
	fn up(self) -> Option<Self>
	where
		Self: Sized;
	/// The greatest value smaller than `self` if one exists.
	fn down(self) -> Option<Self>
	where
		Self: Sized;

	/// The position of `self` counted from [`DiscreteFinite::MIN`], so
	/// `MIN.ordinal() == 0` and `x.up().unwrap().ordinal() == x.ordinal() + 1`.
	///
	/// Every count returned by a [`Diet`](crate::Diet) is computed from
	/// differences of ordinals, which is why counts are `u128`.
	fn ordinal(self) -> u128;
}

macro_rules! discrete_finite {
	() => {};
	($ident:ident as $wide:ident, $($t:tt)*) => {
		impl DiscreteFinite for $ident {
			const MIN: Self = $ident::MIN;
			const MAX: Self = $ident::MAX;

			fn up(self) -> Option<Self> {
				self.checked_add(1)
			}
			fn down(self) -> Option<Self> {
				self.checked_sub(1)
			}
			fn ordinal(self) -> u128 {
				(self as $wide - $ident::MIN as $wide) as u128
			}
		}

		discrete_finite!($($t)*);
	};
}

discrete_finite!(
	u8 as u128,
	i8 as i128,
	u16 as u128,
	i16 as i128,
	u32 as u128,
	i32 as i128,
	u64 as u128,
	i64 as i128,
	usize as u128,
	isize as i128,
);
