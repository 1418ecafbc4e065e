/*! Ownership through the adaptor matches ownership through the bare handle.

The same clone and drop sequence runs once against a bare handle and once
against a `DeepConstPtr` around the same kind of handle; every intermediate
count must agree.
!*/

use std::{
	cell::Cell,
	rc::Rc,
};

use deep_const_ptr::prelude::*;

/// Counts its own drops into a shared cell.
struct Tally(Rc<Cell<usize>>);

impl Drop for Tally {
	fn drop(&mut self) {
		self.0.set(self.0.get() + 1);
	}
}

/// Clones and drops a shared handle, recording strong counts and drops.
fn shared_sequence<H>(
	make: impl FnOnce(Tally) -> H,
	count: impl Fn(&H) -> usize,
) -> Vec<(usize, usize)>
where
	H: Clone,
{
	let drops = Rc::new(Cell::new(0));
	let mut log = Vec::new();

	let a = make(Tally(Rc::clone(&drops)));
	log.push((count(&a), drops.get()));
	let b = a.clone();
	let c = b.clone();
	log.push((count(&a), drops.get()));
	drop(a);
	log.push((count(&b), drops.get()));
	drop(b);
	log.push((count(&c), drops.get()));
	drop(c);
	log.push((0, drops.get()));
	log
}

#[test]
fn shared_rc() {
	let bare = shared_sequence(SharedRc::new, SharedRc::strong_count);
	let wrapped = shared_sequence(DeepConstPtr::<SharedRc<Tally>>::new, |p| {
		SharedRc::strong_count(DeepConstPtr::handle(p))
	});
	assert_eq!(bare, [(1, 0), (3, 0), (2, 0), (1, 0), (0, 1)]);
	assert_eq!(bare, wrapped);
}

#[test]
fn shared_arc() {
	let bare = shared_sequence(SharedArc::new, SharedArc::strong_count);
	let wrapped = shared_sequence(DeepConstPtr::<SharedArc<Tally>>::new, |p| {
		SharedArc::strong_count(DeepConstPtr::handle(p))
	});
	assert_eq!(bare, wrapped);
}

#[test]
fn unique() {
	let drops = Rc::new(Cell::new(0));

	let bare = Unique::new(Tally(Rc::clone(&drops)));
	let moved = bare;
	assert_eq!(drops.get(), 0);
	drop(moved);
	assert_eq!(drops.get(), 1);

	let wrapped = DeepConstPtr::<Unique<Tally>>::new(Tally(Rc::clone(&drops)));
	let moved = wrapped;
	assert_eq!(drops.get(), 1);
	drop(moved);
	assert_eq!(drops.get(), 2);
}

#[test]
fn unwrapping_hands_ownership_back() {
	let drops = Rc::new(Cell::new(0));
	let wrapped = DeepConstPtr::<SharedRc<Tally>>::new(Tally(Rc::clone(&drops)));
	let copy = wrapped.clone();

	let handle = DeepConstPtr::into_handle(wrapped);
	assert_eq!(SharedRc::strong_count(&handle), 2);
	let handle = SharedRc::try_unwrap(handle)
		.err()
		.expect("a second owner is still alive");
	drop(copy);

	let tally = SharedRc::try_unwrap(handle)
		.ok()
		.expect("the last owner can unwrap");
	assert_eq!(drops.get(), 0);
	drop(tally);
	assert_eq!(drops.get(), 1);
}
