//! A module containing [`Diet`].
//!
//! `diet` stands for Discrete Interval Encoding Tree.

use alloc::vec::Vec;
use core::fmt::{self, Debug};
use core::marker::PhantomData;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::diet::node::{Link, Node};
use crate::utils::invalid_interval_panic;
use crate::{DiscreteFinite, InclusiveInterval, Interval};

mod balance;
mod node;
mod query;

/// A Discrete Interval Encoding Tree: a set of points stored as maximal
/// disjoint intervals in a binary tree.
///
/// `I` is the generic type parameter for the [`Ord`] type the `K`
/// type is a interval over.
///
/// `K` is the generic type parameter for the interval type stored in the
/// tree, [`Interval`] by default.
///
/// Phrasing it another way: `I` is the point type and `K` is the interval
/// type.
///
/// Inserting merges overlapping and touching intervals so the tree never
/// holds two intervals that could be stored as one. Insertion does not
/// rebalance, call [`Diet::balance()`] after a batch of insertions.
///
/// # Examples
/// ```
/// use diet::interval::ii;
/// use diet::Diet;
///
/// let mut diet = Diet::new();
///
/// diet.insert(ii(1, 5));
/// diet.insert(ii(10, 15));
/// diet.insert(ii(6, 6));
///
/// assert_eq!(diet.iter().collect::<Vec<_>>(), [&ii(1, 6), &ii(10, 15)]);
/// assert_eq!(diet.total(), 12);
/// assert_eq!(diet.intersection(ii(3, 12)), 7);
/// ```
pub struct Diet<I, K = Interval<I>> {
	root: Link<K>,
	phantom: PhantomData<I>,
}

/// The marker trait for valid point types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait PointType: Ord + Copy + DiscreteFinite {}
impl<I> PointType for I where I: Ord + Copy + DiscreteFinite {}

/// The marker trait for valid interval types, a blanket implementation is provided for all types
/// which implement this traits' super-traits so you shouln't need to implement this yourself.
pub trait IntervalType<I>:
	InclusiveInterval<I> + Copy + From<Interval<I>>
{
}
impl<I, K> IntervalType<I> for K
where
	I: PointType,
	K: InclusiveInterval<I> + Copy + From<Interval<I>>,
{
}

impl<I, K> Diet<I, K>
where
	I: PointType,
	K: IntervalType<I>,
{
	/// Makes a new, empty `Diet`.
	///
	/// # Examples
	/// ```
	/// use diet::{Diet, Interval};
	///
	/// let diet: Diet<i8, Interval<i8>> = Diet::new();
	/// ```
	pub fn new() -> Self {
		Diet {
			root: None,
			phantom: PhantomData,
		}
	}

	/// Adds every point of the given interval to the set.
	///
	/// Any stored intervals which overlap or touch the given interval are
	/// merged with it into a single interval, inserting an interval which
	/// is already wholly contained in the set changes nothing.
	///
	/// Use [`Extend`] to insert many intervals in one call.
	///
	/// # Panics
	///
	/// Panics if the given interval is an invalid interval. See [`Invalid
	/// Intervals`](https://docs.rs/diet/latest/diet/index.html#invalid-intervals)
	/// for more details.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let mut diet = Diet::new();
	///
	/// diet.insert(ii(5, 5));
	/// diet.insert(ii(6, 6));
	/// diet.insert(ii(4, 4));
	///
	/// assert_eq!(diet.iter().collect::<Vec<_>>(), [&ii(4, 6)]);
	///
	/// diet.insert(ii(10, 12));
	///
	/// assert_eq!(diet.len(), 2);
	/// ```
	pub fn insert(&mut self, interval: K) {
		invalid_interval_panic(&interval);

		node::insert(&mut self.root, interval);
	}

	/// Returns the number of points present both in the set and in the
	/// given interval.
	///
	/// # Panics
	///
	/// Panics if the given interval is an invalid interval. See [`Invalid
	/// Intervals`](https://docs.rs/diet/latest/diet/index.html#invalid-intervals)
	/// for more details.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 5), ii(10, 15)]);
	///
	/// assert_eq!(diet.intersection(ii(3, 12)), 6);
	/// assert_eq!(diet.intersection(ii(6, 9)), 0);
	/// ```
	pub fn intersection<Q>(&self, interval: Q) -> u128
	where
		Q: InclusiveInterval<I>,
	{
		invalid_interval_panic(&interval);

		query::intersection(&self.root, interval.start(), interval.end())
	}

	/// Returns `true` if every point of the given interval is in the set,
	/// and `false` if not.
	///
	/// # Panics
	///
	/// Panics if the given interval is an invalid interval. See [`Invalid
	/// Intervals`](https://docs.rs/diet/latest/diet/index.html#invalid-intervals)
	/// for more details.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 5), ii(10, 15)]);
	///
	/// assert_eq!(diet.contains(ii(1, 5)), true);
	/// assert_eq!(diet.contains(ii(1, 6)), false);
	/// ```
	pub fn contains<Q>(&self, interval: Q) -> bool
	where
		Q: InclusiveInterval<I>,
	{
		invalid_interval_panic(&interval);

		let size = interval.size();
		self.intersection(interval) == size
	}

	/// Returns `true` if the given point is in the set, and `false` if not.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 5), ii(10, 15)]);
	///
	/// assert_eq!(diet.contains_point(5), true);
	/// assert_eq!(diet.contains_point(6), false);
	/// ```
	pub fn contains_point(&self, point: I) -> bool {
		query::contains_point(&self.root, point)
	}

	/// Returns the number of points in the set.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 2), ii(10, 12)]);
	///
	/// assert_eq!(diet.total(), 5);
	/// ```
	pub fn total(&self) -> u128 {
		self.iter().map(|interval| interval.size()).sum()
	}

	/// Returns the number of points the two sets have in common.
	///
	/// This runs one [`Diet::intersection()`] query on `other` per interval
	/// stored in `self`, so prefer calling it on the smaller of the two.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let a = Diet::from_iter([ii(1, 5), ii(10, 15)]);
	/// let b = Diet::from_iter([ii(4, 11), ii(15, 20)]);
	///
	/// assert_eq!(a.intersection_all(&b), 5);
	/// assert_eq!(b.intersection_all(&a), 5);
	/// ```
	pub fn intersection_all<L>(&self, other: &Diet<I, L>) -> u128
	where
		L: IntervalType<I>,
	{
		self.iter().map(|interval| other.intersection(*interval)).sum()
	}

	/// Rebalances the tree into one of minimal height using the
	/// Day-Stout-Warren algorithm, without changing the stored set.
	///
	/// Insertion never rebalances, so inserting in ascending or descending
	/// order degenerates the tree into a list. This is linear in the number
	/// of stored intervals and uses constant extra memory, it is most
	/// efficient to call it once after a batch of insertions.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let mut diet = Diet::new();
	/// for i in 0..100 {
	/// 	diet.insert(ii(i * 10, i * 10 + 5));
	/// }
	/// assert_eq!(diet.height(), 100);
	///
	/// diet.balance();
	///
	/// assert_eq!(diet.height(), 7);
	/// assert_eq!(diet.total(), 600);
	/// ```
	pub fn balance(&mut self) {
		balance::balance(&mut self.root);
	}

	/// Returns the number of nodes on the longest path from the root of
	/// the tree down to a leaf.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let mut diet = Diet::from_iter([ii(1, 2), ii(5, 6), ii(9, 10)]);
	///
	/// assert_eq!(diet.height(), 3);
	///
	/// diet.balance();
	///
	/// assert_eq!(diet.height(), 2);
	/// ```
	pub fn height(&self) -> usize {
		balance::height(&self.root)
	}

	/// Returns the number of disjoint intervals stored in the tree.
	///
	/// This walks the whole tree.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 2), ii(3, 4), ii(10, 12)]);
	///
	/// assert_eq!(diet.len(), 2);
	/// ```
	pub fn len(&self) -> usize {
		self.iter().count()
	}

	/// Returns `true` if the set contains no points.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let mut diet = Diet::new();
	///
	/// assert_eq!(diet.is_empty(), true);
	///
	/// diet.insert(ii(0, 0));
	///
	/// assert_eq!(diet.is_empty(), false);
	/// ```
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Removes every interval from the tree.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let mut diet = Diet::from_iter([ii(1, 2), ii(5, 6)]);
	///
	/// diet.clear();
	///
	/// assert_eq!(diet.is_empty(), true);
	/// assert_eq!(diet.total(), 0);
	/// ```
	pub fn clear(&mut self) {
		teardown(self.root.take());
	}

	/// Returns an iterator over every interval in the tree in ascending
	/// order.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(10, 12), ii(1, 2), ii(3, 4)]);
	///
	/// let mut iter = diet.iter();
	///
	/// assert_eq!(iter.next(), Some(&ii(1, 4)));
	/// assert_eq!(iter.next(), Some(&ii(10, 12)));
	/// assert_eq!(iter.next(), None);
	/// ```
	pub fn iter(&self) -> Iter<'_, K> {
		Iter::new(&self.root)
	}

	/// Returns the first interval in the tree, if any.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(10, 12), ii(1, 2)]);
	///
	/// assert_eq!(diet.first(), Some(&ii(1, 2)));
	/// ```
	pub fn first(&self) -> Option<&K> {
		self.root.as_deref().map(Node::first)
	}

	/// Returns the last interval in the tree, if any.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(10, 12), ii(1, 2)]);
	///
	/// assert_eq!(diet.last(), Some(&ii(10, 12)));
	/// ```
	pub fn last(&self) -> Option<&K> {
		self.root.as_deref().map(Node::last)
	}

	/// Returns an iterator over the maximally-sized gaps between the
	/// intervals of the tree in ascending order.
	///
	/// Only the gaps between stored intervals are returned, not the points
	/// before the first or after the last interval.
	///
	/// # Examples
	/// ```
	/// use diet::interval::ii;
	/// use diet::Diet;
	///
	/// let diet = Diet::from_iter([ii(1, 2), ii(5, 5), ii(8, 10)]);
	///
	/// assert_eq!(diet.gaps().collect::<Vec<_>>(), [ii(3, 4), ii(6, 7)]);
	/// ```
	pub fn gaps(&self) -> impl Iterator<Item = K> + '_ {
		self.iter().tuple_windows().filter_map(|(before, after)| {
			Some(K::from(Interval {
				start: before.end().up()?,
				end: after.start().down()?,
			}))
		})
	}
}

/// Drops a subtree without recursing, so vine shaped trees of any length
/// can be dropped.
fn teardown<K>(mut link: Link<K>) {
	while let Some(mut node) = link {
		match node.left.take() {
			Some(mut left) => {
				node.left = left.right.take();
				left.right = Some(node);
				link = Some(left);
			}
			None => link = node.right.take(),
		}
	}
}

/// An iterator over the intervals of a [`Diet`] in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`Diet`]. See its
/// documentation for more.
///
/// [`iter`]: Diet::iter
pub struct Iter<'a, K> {
	stack: SmallVec<[&'a Node<K>; 16]>,
}
impl<'a, K> Iter<'a, K> {
	fn new(root: &'a Link<K>) -> Self {
		let mut iter = Iter {
			stack: SmallVec::new(),
		};
		iter.descend(root.as_deref());
		iter
	}

	fn descend(&mut self, mut next: Option<&'a Node<K>>) {
		while let Some(node) = next {
			self.stack.push(node);
			next = node.left.as_deref();
		}
	}
}
impl<'a, K> Iterator for Iter<'a, K> {
	type Item = &'a K;
	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.descend(node.right.as_deref());
		Some(&node.interval)
	}
}

// Trait Impls ==========================

impl<'a, I, K> IntoIterator for &'a Diet<I, K>
where
	I: PointType,
	K: IntervalType<I>,
{
	type Item = &'a K;
	type IntoIter = Iter<'a, K>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<I, K> Default for Diet<I, K> {
	fn default() -> Self {
		Diet {
			root: None,
			phantom: PhantomData,
		}
	}
}

impl<I, K> Drop for Diet<I, K> {
	fn drop(&mut self) {
		teardown(self.root.take());
	}
}

impl<I, K> Clone for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I>,
{
	/// The clone holds the same intervals in a balanced tree, whatever the
	/// shape of the original.
	fn clone(&self) -> Self {
		let intervals = self.iter().copied().collect::<Vec<_>>();
		Diet {
			root: Node::from_sorted(&intervals),
			phantom: PhantomData,
		}
	}
}

impl<I, K> Debug for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I> + Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

/// Two trees are equal when they store the same intervals, whatever their
/// shapes.
impl<I, K> PartialEq for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I> + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}
impl<I, K> Eq for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I> + Eq,
{
}

impl<I, K> Extend<K> for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I>,
{
	fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
		for interval in iter {
			self.insert(interval);
		}
	}
}

impl<I, K> FromIterator<K> for Diet<I, K>
where
	I: PointType,
	K: IntervalType<I>,
{
	fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
		let mut diet = Diet::new();
		diet.extend(iter);
		diet
	}
}
