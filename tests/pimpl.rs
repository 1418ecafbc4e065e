/*! Types that keep their private state behind a `DeepConstPtr`.

Each owning type has a `&mut self` setter and a `&self` getter. The setters
reach the private state writably and the getters read it back; the
`compile_fail` examples on `DeepConstPtr` cover the getters' inability to
write.
!*/

use deep_const_ptr::prelude::*;

struct Private {
	value: i32,
}

/// Exclusive ownership of the private state.
struct Owner {
	d: DeepConstPtr<Unique<Private>>,
}

impl Owner {
	fn new() -> Self {
		Self {
			d: DeepConstPtr::new(Private { value: 0 }),
		}
	}

	fn set(&mut self, value: i32) {
		self.d.value = value;
	}

	fn get(&self) -> i32 {
		self.d.value
	}

	fn read_ptr(&self) -> *const Private {
		DeepConstPtr::as_ptr(&self.d)
	}

	fn write_ptr(&mut self) -> *mut Private {
		DeepConstPtr::as_mut_ptr(&mut self.d)
	}
}

/// Co-owned private state, as a copy-on-share value type would hold it.
#[derive(Clone)]
struct CoOwner {
	d: DeepConstPtr<SharedRc<Private>>,
}

impl CoOwner {
	fn new() -> Self {
		Self {
			d: DeepConstPtr::new(Private { value: 0 }),
		}
	}

	fn try_set(&mut self, value: i32) -> bool {
		match DeepConstPtr::get_mut(&mut self.d) {
			Some(private) => {
				private.value = value;
				true
			},
			None => false,
		}
	}

	fn get(&self) -> i32 {
		self.d.value
	}
}

#[test]
fn exclusive_owner() {
	let mut owner = Owner::new();
	assert_eq!(owner.get(), 0);
	owner.set(42);
	assert_eq!(owner.get(), 42);

	let read: *const Private = owner.read_ptr();
	let write: *mut Private = owner.write_ptr();
	assert_eq!(read, write as *const Private);
}

#[test]
fn shared_owner() {
	let mut owner = CoOwner::new();
	assert!(owner.try_set(42));
	assert_eq!(owner.get(), 42);

	let copy = owner.clone();
	assert!(!owner.try_set(7));
	assert_eq!(copy.get(), 42);
	drop(copy);

	assert!(owner.try_set(7));
	assert_eq!(owner.get(), 7);
}

/// An owning type whose private state itself holds a `DeepConstPtr`.
struct Outer {
	d: DeepConstPtr<Unique<Middle>>,
}

struct Middle {
	label: &'static str,
	d: DeepConstPtr<Unique<Private>>,
}

impl Outer {
	fn new() -> Self {
		Self {
			d: DeepConstPtr::new(Middle {
				label: "middle",
				d: DeepConstPtr::new(Private { value: 0 }),
			}),
		}
	}

	fn set(&mut self, value: i32) {
		self.d.d.value = value;
	}

	fn get(&self) -> (&'static str, i32) {
		let middle: &Middle = &self.d;
		let private: &Private = &middle.d;
		(middle.label, private.value)
	}
}

#[test]
fn stacked_owner() {
	let mut outer = Outer::new();
	outer.set(42);
	assert_eq!(outer.get(), ("middle", 42));
}
