//! The [`Node`] type and the insert/merge engine of the [`Diet`].
//!
//! Every function here works on owned `Box<Node>` links in place. The
//! invariant maintained across them is that an in-order walk yields strictly
//! increasing intervals where no two consecutive intervals overlap or touch.
//!
//! [`Diet`]: crate::Diet

use alloc::boxed::Box;

use crate::utils::mergeable;
use crate::{IntervalType, PointType};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single maximal interval and the two subtrees around it.
#[derive(Debug)]
pub(crate) struct Node<K> {
	pub(crate) interval: K,
	pub(crate) left: Link<K>,
	pub(crate) right: Link<K>,
}

impl<K> Node<K> {
	pub(crate) fn leaf(interval: K) -> Box<Self> {
		Box::new(Node {
			interval,
			left: None,
			right: None,
		})
	}

	/// The interval of the left-most node of this subtree.
	pub(crate) fn first(&self) -> &K {
		let mut node = self;
		while let Some(left) = &node.left {
			node = left;
		}
		&node.interval
	}

	/// The interval of the right-most node of this subtree.
	pub(crate) fn last(&self) -> &K {
		let mut node = self;
		while let Some(right) = &node.right {
			node = right;
		}
		&node.interval
	}

	/// Builds a perfectly balanced subtree out of already normalized
	/// intervals.
	pub(crate) fn from_sorted(intervals: &[K]) -> Link<K>
	where
		K: Copy,
	{
		if intervals.is_empty() {
			return None;
		}
		let middle = intervals.len() / 2;
		Some(Box::new(Node {
			interval: intervals[middle],
			left: Node::from_sorted(&intervals[..middle]),
			right: Node::from_sorted(&intervals[middle + 1..]),
		}))
	}
}

/// Detaches the node holding the greatest interval of the subtree, putting
/// its left child in its place, and returns its interval.
pub(crate) fn split_max<K>(link: &mut Link<K>) -> Option<K> {
	let mut cursor = link;
	while cursor.as_ref()?.right.is_some() {
		cursor = &mut cursor.as_mut()?.right;
	}
	let node = cursor.take()?;
	let Node { interval, left, .. } = *node;
	*cursor = left;
	Some(interval)
}

/// Detaches the node holding the smallest interval of the subtree, putting
/// its right child in its place, and returns its interval.
pub(crate) fn split_min<K>(link: &mut Link<K>) -> Option<K> {
	let mut cursor = link;
	while cursor.as_ref()?.left.is_some() {
		cursor = &mut cursor.as_mut()?.left;
	}
	let node = cursor.take()?;
	let Node { interval, right, .. } = *node;
	*cursor = right;
	Some(interval)
}

/// Absorbs into `node` every interval of its left subtree which overlaps or
/// touches the interval of `node`.
///
/// Must be called after the start of `node.interval` has been lowered.
pub(crate) fn join_left<I, K>(node: &mut Node<K>)
where
	I: PointType,
	K: IntervalType<I>,
{
	while let Some(max) = node.left.as_deref().map(|left| *left.last()) {
		if !mergeable(&max, &node.interval) {
			break;
		}
		split_max(&mut node.left);
		node.interval = max.extend(&node.interval);
	}
}

/// Absorbs into `node` every interval of its right subtree which overlaps
/// or touches the interval of `node`.
///
/// Must be called after the end of `node.interval` has been raised.
pub(crate) fn join_right<I, K>(node: &mut Node<K>)
where
	I: PointType,
	K: IntervalType<I>,
{
	while let Some(min) = node.right.as_deref().map(|right| *right.first()) {
		if !mergeable(&node.interval, &min) {
			break;
		}
		split_min(&mut node.right);
		node.interval = node.interval.extend(&min);
	}
}

/// Adds every point of `interval` to the subtree at `root`.
pub(crate) fn insert<I, K>(root: &mut Link<K>, interval: K)
where
	I: PointType,
	K: IntervalType<I>,
{
	let mut cursor = root;
	while let Some(node) = cursor {
		let current = node.interval;

		if current.contains(&interval) {
			return;
		} else if interval.less_than(&current) {
			if !interval.adjacent(&current, 1) {
				cursor = &mut node.left;
				continue;
			}
			node.interval = interval.extend(&current);
			join_left(node);
		} else if interval.greater_than(&current) {
			if !interval.adjacent(&current, 1) {
				cursor = &mut node.right;
				continue;
			}
			node.interval = current.extend(&interval);
			join_right(node);
		} else if interval.contains(&current) {
			node.interval = interval;
			join_left(node);
			join_right(node);
		} else if interval.starts_before(&current) {
			node.interval = interval.extend(&current);
			join_left(node);
		} else {
			// overlaps the upper end only
			node.interval = current.extend(&interval);
			join_right(node);
		}
		return;
	}
	*cursor = Some(Node::leaf(interval));
}

#[cfg(test)]
pub(crate) mod tests {
	use alloc::vec::Vec;

	use itertools::Itertools;
	use pretty_assertions::assert_eq;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::interval::ii;
	use crate::{InclusiveInterval, Interval};

	pub(crate) fn in_order<K: Copy>(link: &Link<K>) -> Vec<K> {
		let mut output = Vec::new();
		if let Some(node) = link {
			output.extend(in_order(&node.left));
			output.push(node.interval);
			output.extend(in_order(&node.right));
		}
		output
	}

	pub(crate) fn assert_normalized(intervals: &[Interval<i32>]) {
		for (a, b) in intervals.iter().tuple_windows() {
			assert!(
				a.less_than(b) && !a.adjacent(b, 1),
				"{a:?} and {b:?} should have been merged"
			);
		}
	}

	fn build(intervals: &[Interval<i32>]) -> Link<Interval<i32>> {
		let mut root = None;
		for interval in intervals {
			insert(&mut root, *interval);
		}
		root
	}

	fn assert_insert<const N: usize, const M: usize>(
		before: [Interval<i32>; N],
		to_insert: Interval<i32>,
		after: [Interval<i32>; M],
	) {
		let mut root = build(&before);
		insert(&mut root, to_insert);
		let result = in_order(&root);
		assert_eq!(result, after);
		assert_normalized(&result);
	}

	#[test]
	fn insert_into_empty() {
		assert_insert([], ii(1, 4), [ii(1, 4)]);
	}

	#[test]
	fn insert_contained_is_noop() {
		assert_insert([ii(1, 10)], ii(3, 4), [ii(1, 10)]);
		assert_insert([ii(1, 10)], ii(1, 10), [ii(1, 10)]);
	}

	#[test]
	fn insert_disjoint() {
		assert_insert([ii(1, 2)], ii(10, 12), [ii(1, 2), ii(10, 12)]);
		assert_insert([ii(10, 12)], ii(1, 2), [ii(1, 2), ii(10, 12)]);
	}

	#[test]
	fn insert_adjacent_merges_both_sides() {
		assert_insert([ii(5, 5), ii(6, 6)], ii(4, 4), [ii(4, 6)]);
		assert_insert([ii(1, 3), ii(5, 7)], ii(4, 4), [ii(1, 7)]);
		assert_insert([ii(5, 7), ii(1, 3)], ii(4, 4), [ii(1, 7)]);
	}

	#[test]
	fn insert_overlapping_boundaries() {
		assert_insert([ii(5, 10)], ii(2, 6), [ii(2, 10)]);
		assert_insert([ii(5, 10)], ii(8, 14), [ii(5, 14)]);
		assert_insert([ii(5, 10), ii(0, 2)], ii(3, 6), [ii(0, 10)]);
		assert_insert([ii(5, 10), ii(13, 20)], ii(8, 12), [ii(5, 20)]);
	}

	#[test]
	fn insert_covering_several_intervals() {
		assert_insert(
			[ii(4, 5), ii(0, 0), ii(2, 2), ii(7, 7), ii(12, 12), ii(14, 20)],
			ii(1, 11),
			[ii(0, 12), ii(14, 20)],
		);
		assert_insert(
			[ii(10, 10), ii(5, 5), ii(15, 15), ii(1, 1), ii(20, 20)],
			ii(3, 17),
			[ii(1, 1), ii(3, 17), ii(20, 20)],
		);
	}

	#[test]
	fn insert_at_domain_edges() {
		let mut root = None;
		insert(&mut root, ii(i32::MIN, i32::MIN));
		insert(&mut root, ii(i32::MAX, i32::MAX));
		insert(&mut root, ii(i32::MIN + 1, i32::MAX - 1));
		assert_eq!(in_order(&root), [ii(i32::MIN, i32::MAX)]);
	}

	#[test]
	fn split_tests() {
		let mut root = build(&[ii(10, 10), ii(5, 5), ii(15, 15), ii(12, 12)]);
		assert_eq!(split_max(&mut root), Some(ii(15, 15)));
		assert_eq!(split_min(&mut root), Some(ii(5, 5)));
		assert_eq!(in_order(&root), [ii(10, 10), ii(12, 12)]);
		assert_eq!(split_max(&mut root), Some(ii(12, 12)));
		assert_eq!(split_max(&mut root), Some(ii(10, 10)));
		assert_eq!(split_max(&mut root), None);
		assert_eq!(split_min(&mut root), None);
	}

	#[test]
	fn random_inserts_match_model() {
		const DOMAIN: usize = 200;
		let mut rng = StdRng::seed_from_u64(0x5eed);

		for _ in 0..50 {
			let mut model = [false; DOMAIN];
			let mut root = None;

			for _ in 0..40 {
				let start = rng.random_range(0..DOMAIN as i32);
				let end = (start + rng.random_range(0..8)).min(DOMAIN as i32 - 1);
				insert(&mut root, ii(start, end));
				for point in start..=end {
					model[point as usize] = true;
				}

				let intervals = in_order(&root);
				assert_normalized(&intervals);
				for (point, expected) in model.iter().enumerate() {
					let found = intervals
						.iter()
						.any(|interval| interval.contains_point(point as i32));
					assert_eq!(found, *expected);
				}
			}
		}
	}
}
