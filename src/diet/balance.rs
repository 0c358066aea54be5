//! Day-Stout-Warren rebalancing of a [`Diet`](crate::Diet).
//!
//! The tree is first flattened into a right-leaning "vine" and then folded
//! back up by repeated rounds of left rotations along the vine. Both passes
//! only swap the boxes of existing nodes around, so no node is allocated or
//! freed and the extra space used is constant.

use alloc::boxed::Box;
use core::mem;

use log::{debug, trace};
use smallvec::SmallVec;

use crate::diet::node::{Link, Node};

/// Rebalances the tree at `root` into one of minimal height.
pub(crate) fn balance<K>(root: &mut Link<K>) {
	let mut size = tree_to_vine(root);
	if size == 0 {
		return;
	}

	let leaves = size + 1 - nearest_pow2(size + 1);
	debug!("balancing {size} nodes, {leaves} leaf rotations");

	compress(root, leaves);
	size -= leaves;
	while size > 1 {
		size >>= 1;
		trace!("compressing {size} vine nodes");
		compress(root, size);
	}
}

/// Rotates every left child up until no node has one, returning the node
/// count.
fn tree_to_vine<K>(root: &mut Link<K>) -> usize {
	let mut size = 0;
	let mut cursor = root;
	while let Some(node) = cursor {
		while node.left.is_some() {
			rotate_right(node);
		}
		size += 1;
		cursor = &mut node.right;
	}
	size
}

/// Performs `count` left rotations down the right spine, each on every
/// other node.
fn compress<K>(root: &mut Link<K>, count: usize) {
	let mut cursor = root;
	for _ in 0..count {
		let Some(node) = cursor else {
			return;
		};
		rotate_left(node);
		cursor = &mut node.right;
	}
}

fn rotate_right<K>(node: &mut Box<Node<K>>) {
	if let Some(mut left) = node.left.take() {
		node.left = left.right.take();
		mem::swap(node, &mut left);
		node.right = Some(left);
	}
}

fn rotate_left<K>(node: &mut Box<Node<K>>) {
	if let Some(mut right) = node.right.take() {
		node.right = right.left.take();
		mem::swap(node, &mut right);
		node.left = Some(right);
	}
}

/// `2^floor(log2(n))`, the largest power of two not greater than `n`.
pub(crate) fn nearest_pow2(n: usize) -> usize {
	let mut pow = 1;
	while pow <= n {
		pow <<= 1;
	}
	pow >> 1
}

/// The number of nodes on the longest path from the root down to a leaf.
pub(crate) fn height<K>(root: &Link<K>) -> usize {
	let mut stack: SmallVec<[(&Node<K>, usize); 32]> = SmallVec::new();
	let mut height = 0;

	if let Some(node) = root.as_deref() {
		stack.push((node, 1));
	}
	while let Some((node, depth)) = stack.pop() {
		height = height.max(depth);
		for child in [node.left.as_deref(), node.right.as_deref()]
			.into_iter()
			.flatten()
		{
			stack.push((child, depth + 1));
		}
	}

	height
}
