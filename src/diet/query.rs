//! The query engine of the [`Diet`](crate::Diet).
//!
//! Every node's interval doubles as the `[min, max]` bound used to prune the
//! search, so only subtrees which may still overlap the query are visited.

use smallvec::SmallVec;

use crate::diet::node::Link;
use crate::utils::span;
use crate::{IntervalType, PointType};

/// The number of points of `start..=end` present in the subtree at `link`.
///
/// Sub-queries still to be answered are kept on an explicit stack so that
/// the depth of the tree never turns into call depth.
pub(crate) fn intersection<I, K>(link: &Link<K>, start: I, end: I) -> u128
where
	I: PointType,
	K: IntervalType<I>,
{
	let mut pending: SmallVec<[(&Link<K>, I, I); 16]> = SmallVec::new();
	pending.push((link, start, end));

	let mut count = 0;
	while let Some((link, start, end)) = pending.pop() {
		count += intersection_path(link, start, end, &mut pending);
	}
	count
}

/// Follows a single path down from `link`, pushing the left-hand remainder
/// of the query onto `pending` whenever the query covers a whole node.
fn intersection_path<'a, I, K>(
	mut link: &'a Link<K>,
	mut start: I,
	mut end: I,
	pending: &mut SmallVec<[(&'a Link<K>, I, I); 16]>,
) -> u128
where
	I: PointType,
	K: IntervalType<I>,
{
	let mut count = 0;

	while let Some(node) = link {
		let min = node.interval.start();
		let max = node.interval.end();

		if start > max {
			link = &node.right;
		} else if end < min {
			link = &node.left;
		} else if start >= min && end <= max {
			return count + span(start, end);
		} else if start >= min {
			count += span(start, max);
			match max.up() {
				Some(after) => start = after,
				None => break,
			}
			link = &node.right;
		} else if end <= max {
			count += span(min, end);
			match min.down() {
				Some(before) => end = before,
				None => break,
			}
			link = &node.left;
		} else {
			// the query covers the whole node
			count += span(min, max);
			if let Some(before) = min.down() {
				pending.push((&node.left, start, before));
			}
			match max.up() {
				Some(after) => start = after,
				None => break,
			}
			link = &node.right;
		}
	}

	count
}

/// Whether `point` is present in the subtree at `link`.
pub(crate) fn contains_point<I, K>(mut link: &Link<K>, point: I) -> bool
where
	I: PointType,
	K: IntervalType<I>,
{
	while let Some(node) = link {
		if point < node.interval.start() {
			link = &node.left;
		} else if point > node.interval.end() {
			link = &node.right;
		} else {
			return true;
		}
	}
	false
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::diet::node::insert;
	use crate::interval::ii;
	use crate::Interval;

	fn build(intervals: &[Interval<i32>]) -> Link<Interval<i32>> {
		let mut root = None;
		for interval in intervals {
			insert(&mut root, *interval);
		}
		root
	}

	#[test]
	fn intersection_tests() {
		let root = build(&[ii(1, 5), ii(10, 15)]);

		assert_eq!(intersection(&root, 3, 12), 6);
		assert_eq!(intersection(&root, 1, 5), 5);
		assert_eq!(intersection(&root, 1, 6), 5);
		assert_eq!(intersection(&root, 6, 9), 0);
		assert_eq!(intersection(&root, -100, 100), 11);
		assert_eq!(intersection(&root, 15, 15), 1);
		assert_eq!(intersection(&root, 16, 20), 0);

		let empty: Link<Interval<i32>> = None;
		assert_eq!(intersection(&empty, 0, 10), 0);
	}

	#[test]
	fn intersection_at_domain_edges() {
		let mut root = None;
		insert(&mut root, ii(i8::MIN, -100));
		insert(&mut root, ii(0, 0));
		insert(&mut root, ii(100, i8::MAX));

		assert_eq!(intersection(&root, i8::MIN, i8::MAX), 29 + 1 + 28);
		assert_eq!(intersection(&root, i8::MIN, i8::MIN), 1);
		assert_eq!(intersection(&root, i8::MAX, i8::MAX), 1);
		assert_eq!(intersection(&root, -1, 1), 1);
	}

	#[test]
	fn contains_point_tests() {
		let root = build(&[ii(1, 5), ii(10, 15), ii(20, 20)]);

		assert!(contains_point(&root, 1));
		assert!(contains_point(&root, 12));
		assert!(contains_point(&root, 20));
		assert!(!contains_point(&root, 0));
		assert!(!contains_point(&root, 7));
		assert!(!contains_point(&root, 21));
	}

	#[test]
	fn random_intersections_match_model() {
		const DOMAIN: i32 = 120;
		let mut rng = StdRng::seed_from_u64(42);

		for _ in 0..30 {
			let mut model = [false; DOMAIN as usize];
			let mut root = None;
			for _ in 0..15 {
				let start = rng.random_range(0..DOMAIN);
				let end = (start + rng.random_range(0..10)).min(DOMAIN - 1);
				insert(&mut root, ii(start, end));
				for point in start..=end {
					model[point as usize] = true;
				}
			}

			for _ in 0..50 {
				let start = rng.random_range(-5..DOMAIN + 5);
				let end = start + rng.random_range(0..40);
				let expected = (start..=end)
					.filter(|point| (0..DOMAIN).contains(point) && model[*point as usize])
					.count() as u128;
				assert_eq!(intersection(&root, start, end), expected);
			}
		}
	}
}
