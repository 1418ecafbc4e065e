/*! The const-propagating adaptor.

[`DeepConstPtr`] wraps any [`Handle`] and re-exposes its pointee with the
qualification of the borrow it is reached through. A method taking `&self`
sees `&Element` and `*const Element`; a method taking `&mut self` sees
`&mut Element` and `*mut Element`. The choice is made by the receiver type, so
the borrow checker enforces it and nothing is decided at run time.

All other behavior (construction, drop, clone, reference counting, thread
safety) is the wrapped handle's, forwarded unchanged.
!*/

use alloc::boxed::Box;
use core::ops::{
	Deref,
	DerefMut,
};

use tap::Pipe;

use crate::{
	handle::{
		Exclusive,
		Handle,
	},
	trace::trace_access,
};

mod traits;

/** A handle adaptor that propagates read-only access to its pointee.

# Original

`deep_const_ptr<P>`, a C++ class template deriving from `P` (a `unique_ptr` or
`shared_ptr`) and overloading `operator->` on `const`.

# API Differences

Rust has no overloading on the qualification of `this`. The two access paths
are instead two receivers: [`Deref`] and [`DeepConstPtr::as_ptr`] take
`&Self`, while [`DerefMut`], [`DeepConstPtr::get_mut`], and
[`DeepConstPtr::as_mut_ptr`] take `&mut Self`. A type that stores its private
state in a `DeepConstPtr` field gets the right one automatically from the
receiver of its own methods.

The adaptor is a field holding the handle, not a subclass of it. Operations it
does not specialize are forwarded explicitly, and its methods are associated
functions (`DeepConstPtr::as_ptr(&p)`) so that they never shadow methods of
the pointee.

# Type Parameters

- `H`: The wrapped ownership handle, such as [`Unique`] or [`Shared`].

# Examples

A type keeping its private state behind a `DeepConstPtr`:

```rust
use deep_const_ptr::prelude::*;

struct Private {
  value: i32,
}

pub struct Public {
  d: DeepConstPtr<Unique<Private>>,
}

impl Public {
  pub fn new() -> Self {
    Self { d: DeepConstPtr::new(Private { value: 0 }) }
  }

  pub fn set(&mut self, value: i32) {
    self.d.value = value;
  }

  pub fn get(&self) -> i32 {
    self.d.value
  }
}

let mut public = Public::new();
public.set(42);
assert_eq!(public.get(), 42);
```

A `&self` method cannot write to the private state:

```rust,compile_fail
use deep_const_ptr::prelude::*;

struct Private {
  value: i32,
}

pub struct Public {
  d: DeepConstPtr<Unique<Private>>,
}

impl Public {
  pub fn sneaky(&self) {
    self.d.value = 0;
  }
}
```

Nor can it reach a writable pointer:

```rust,compile_fail
use deep_const_ptr::prelude::*;

struct Private {
  value: i32,
}

pub struct Public {
  d: DeepConstPtr<SharedRc<Private>>,
}

impl Public {
  pub fn sneaky(&self) -> *mut Private {
    DeepConstPtr::as_mut_ptr(&self.d)
  }
}
```

Read-only-ness carries through a stack of adaptors. A `&self` method of the
outer type cannot write two levels down:

```rust,compile_fail
use deep_const_ptr::prelude::*;

struct Private {
  value: i32,
}

struct Middle {
  d: DeepConstPtr<Unique<Private>>,
}

pub struct Outer {
  d: DeepConstPtr<Unique<Middle>>,
}

impl Outer {
  pub fn sneaky(&self) {
    self.d.d.value = 1;
  }
}
```

[`Deref`]: core::ops::Deref
[`DerefMut`]: core::ops::DerefMut
[`Shared`]: crate::shared::Shared
[`Unique`]: crate::unique::Unique
**/
#[repr(transparent)]
pub struct DeepConstPtr<H>
where H: Handle
{
	inner: H,
}

impl<H> DeepConstPtr<H>
where H: Handle
{
	/// Takes ownership of a heap-allocated pointee, through the wrapped
	/// handle's own constructor.
	///
	/// The pointer is not inspected; whatever `H::from_raw` accepts, this
	/// accepts.
	///
	/// # Safety
	///
	/// The contract of [`Handle::from_raw`]: `ptr` must come from
	/// [`Box::into_raw`] and must not be owned by anything else.
	///
	/// # Examples
	///
	/// ```rust
	/// use deep_const_ptr::prelude::*;
	///
	/// let raw = Box::into_raw(Box::new(5u8));
	/// let mut ptr = unsafe { DeepConstPtr::<Unique<u8>>::from_raw(raw) };
	/// assert_eq!(DeepConstPtr::as_mut_ptr(&mut ptr), raw);
	/// ```
	///
	/// [`Box::into_raw`]: alloc::boxed::Box::into_raw
	#[inline]
	pub unsafe fn from_raw(ptr: *mut H::Element) -> Self {
		H::from_raw(ptr).pipe(Self::from_handle)
	}

	/// Moves `value` onto the heap and wraps a new handle around it.
	#[inline]
	pub fn new(value: H::Element) -> Self
	where H::Element: Sized {
		Box::new(value).pipe(Self::from_box)
	}

	/// Wraps a handle around an existing allocation.
	#[inline]
	pub fn from_box(boxed: Box<H::Element>) -> Self {
		unsafe { Self::from_raw(Box::into_raw(boxed)) }
	}

	/// Wraps an existing handle.
	#[inline]
	pub fn from_handle(handle: H) -> Self {
		Self { inner: handle }
	}

	/// Unwraps the handle, restoring its own (non-propagating) access.
	#[inline]
	pub fn into_handle(this: Self) -> H {
		this.inner
	}

	/// Borrows the wrapped handle.
	///
	/// The handle's own primitive still yields `*mut Element` through this
	/// borrow, but using that pointer requires `unsafe`.
	#[inline]
	pub fn handle(this: &Self) -> &H {
		&this.inner
	}

	/// Read-only access: a `*const` pointer to the pointee.
	///
	/// This is the wrapped handle's pointer, unmodified and unchecked, with
	/// its write permission removed.
	#[inline]
	pub fn as_ptr(this: &Self) -> *const H::Element {
		trace_access!(H, "const");
		this.inner.as_mut_ptr().cast_const()
	}

	/// Mutable access: a `*mut` pointer to the pointee.
	///
	/// This is exactly what the wrapped handle's own primitive returns. Only
	/// reachable through `&mut`.
	#[inline]
	pub fn as_mut_ptr(this: &mut Self) -> *mut H::Element {
		trace_access!(H, "mut");
		this.inner.as_mut_ptr()
	}

	/// Mutable access through a reference, when no other handle co-owns the
	/// pointee.
	///
	/// Exclusive handles always succeed; shared handles succeed only while
	/// they are the last owner.
	///
	/// # Original
	///
	/// [`Rc::get_mut`](alloc::rc::Rc::get_mut)
	///
	/// # Examples
	///
	/// ```rust
	/// use deep_const_ptr::prelude::*;
	///
	/// let mut a = DeepConstPtr::<SharedRc<u32>>::new(1);
	/// *DeepConstPtr::get_mut(&mut a).unwrap() += 1;
	///
	/// let b = a.clone();
	/// assert!(DeepConstPtr::get_mut(&mut a).is_none());
	/// drop(b);
	/// assert_eq!(DeepConstPtr::get_mut(&mut a), Some(&mut 2));
	/// ```
	#[inline]
	pub fn get_mut(this: &mut Self) -> Option<&mut H::Element> {
		if !this.inner.is_unique() {
			return None;
		}
		Some(unsafe { &mut *Self::as_mut_ptr(this) })
	}

	/// Tests whether two adaptors own the same pointee, as decided by
	/// [`Handle::same_owner`].
	#[inline]
	pub fn ptr_eq(this: &Self, that: &Self) -> bool {
		this.inner.same_owner(&that.inner)
	}
}

impl<H> Deref for DeepConstPtr<H>
where H: Handle
{
	type Target = H::Element;

	#[inline]
	fn deref(&self) -> &Self::Target {
		unsafe { &*Self::as_ptr(self) }
	}
}

impl<H> DerefMut for DeepConstPtr<H>
where H: Exclusive
{
	#[inline]
	fn deref_mut(&mut self) -> &mut Self::Target {
		unsafe { &mut *Self::as_mut_ptr(self) }
	}
}
