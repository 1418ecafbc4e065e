/*! Reference-counted handles.

[`Shared`] co-owns one heap pointee with every clone of itself, and frees it
when the last clone drops. The counter lives in its own allocation, as in a
C++ `shared_ptr` control block, so the pointee stays exactly where its
original `Box` put it.

The counter type is a type parameter, as in `bitvec`'s reference-counted
slices: [`SharedRc`] counts through a `Cell` and is confined to one thread,
while [`SharedArc`] counts atomically.
!*/

use alloc::boxed::Box;
use core::{
	cell::Cell,
	cmp,
	fmt::{
		self,
		Debug,
		Formatter,
		Pointer,
	},
	hash::{
		Hash,
		Hasher,
	},
	marker::PhantomData,
	mem::ManuallyDrop,
	ptr::{
		self,
		NonNull,
	},
	sync::atomic::{
		self,
		AtomicUsize,
		Ordering,
	},
};

use radium::Radium;
use tap::Pipe;
use wyz::fmt::FmtForward;

use crate::handle::{
	Handle,
	NullError,
};

/// A thread-unsafe shared handle, equivalent to `shared_ptr` confined to one
/// thread.
pub type SharedRc<T> = Shared<Cell<usize>, T>;

/// A thread-safe shared handle, equivalent to `shared_ptr`.
pub type SharedArc<T> = Shared<AtomicUsize, T>;

/// Clones past this count are refused. The rest of the counter's range is
/// headroom for increments racing the check, so the count never wraps.
const MAX_COUNT: usize = isize::MAX as usize;

/// The count stays above [`MAX_COUNT`] after this panics, so every later clone
/// of the same group also refuses.
#[cold]
#[inline(never)]
fn overflow() -> ! {
	panic!("`Shared` strong count overflowed");
}

/** A reference-counted owning handle.

# Original

[`std::shared_ptr<T>`](https://en.cppreference.com/w/cpp/memory/shared_ptr)

# API Differences

`Shared` is never null, and has no weak counterpart. Its access primitive,
[`Shared::as_mut_ptr`], takes `&Self` and returns `*mut T`, like
`shared_ptr::operator->() const`; it has no `Deref`.

Comparison and hashing use the address of the counter, which is shared by
exactly the handles of one owner group. Clones compare equal; handles made by
separate constructors never do, even for zero-sized pointees.

# Type Parameters

- `R`: The counter. `Cell<usize>` for single-threaded use, `AtomicUsize` for
  use across threads.
- `T`: The pointee.
**/
pub struct Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	/// Produced by `Box::into_raw`; co-owned by every clone.
	ptr: NonNull<T>,
	/// The strong count, in its own allocation.
	count: NonNull<R>,
	/// `Shared` owns a `T` for drop-check purposes.
	_own: PhantomData<T>,
}

impl<R, T> Shared<R, T>
where R: Radium<Item = usize>
{
	/// Moves `value` onto the heap and takes shared ownership of it.
	#[inline]
	pub fn new(value: T) -> Self {
		Box::new(value).pipe(Self::from)
	}

	/// Moves the pointee out, if this is its last owner.
	///
	/// # Original
	///
	/// [`Rc::try_unwrap`](alloc::rc::Rc::try_unwrap)
	#[inline]
	pub fn try_unwrap(this: Self) -> Result<T, Self> {
		Self::try_into_box(this).map(|boxed| *boxed)
	}
}

impl<R, T> Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	/// Takes shared ownership of a heap-allocated pointee, starting a fresh
	/// count at one.
	///
	/// # Safety
	///
	/// `ptr` must be non-null, must have been produced by [`Box::into_raw`],
	/// and must not be owned by anything else.
	///
	/// [`Box::into_raw`]: alloc::boxed::Box::into_raw
	#[inline]
	pub unsafe fn from_raw(ptr: *mut T) -> Self {
		Self::from_non_null(NonNull::new_unchecked(ptr))
	}

	/// Takes shared ownership of a heap-allocated pointee, refusing the null
	/// pointer.
	///
	/// # Safety
	///
	/// As [`Self::from_raw`], except that `ptr` may be null.
	#[inline]
	pub unsafe fn try_from_raw(ptr: *mut T) -> Result<Self, NullError> {
		NonNull::new(ptr)
			.ok_or(NullError::Null)
			.map(Self::from_non_null)
	}

	fn from_non_null(ptr: NonNull<T>) -> Self {
		let count = Box::new(R::new(1)).pipe(Box::leak).pipe(NonNull::from);
		Self {
			ptr,
			count,
			_own: PhantomData,
		}
	}

	/// Counts the handles co-owning this pointee.
	///
	/// # Original
	///
	/// [`shared_ptr::use_count`](https://en.cppreference.com/w/cpp/memory/shared_ptr/use_count)
	#[inline]
	pub fn strong_count(this: &Self) -> usize {
		this.counter().load(Ordering::Acquire)
	}

	/// Tests whether two handles co-own the same pointee.
	///
	/// Handles are the same owner group exactly when they share a counter.
	/// Zero-sized pointees all live at one dangling address, so the pointee
	/// address cannot tell two groups apart.
	#[inline]
	pub fn ptr_eq(this: &Self, that: &Self) -> bool {
		ptr::eq(this.count.as_ptr(), that.count.as_ptr())
	}

	/// Releases the pointee into a [`Box`], if this is its last owner.
	/// Otherwise, gives the handle back unchanged.
	///
	/// [`Box`]: alloc::boxed::Box
	pub fn try_into_box(this: Self) -> Result<Box<T>, Self> {
		if this
			.counter()
			.compare_exchange(1, 0, Ordering::Acquire, Ordering::Relaxed)
			.is_err()
		{
			return Err(this);
		}
		let this = ManuallyDrop::new(this);
		unsafe {
			drop(Box::from_raw(this.count.as_ptr()));
			Ok(Box::from_raw(this.ptr.as_ptr()))
		}
	}

	/// The address of the pointee, writable regardless of how `this` is
	/// borrowed.
	#[inline]
	pub fn as_mut_ptr(this: &Self) -> *mut T {
		this.ptr.as_ptr()
	}

	#[inline]
	fn counter(&self) -> &R {
		unsafe { self.count.as_ref() }
	}

	/// The counter address. Unlike the pointee address, this is distinct for
	/// every owner group, including those of zero-sized pointees.
	#[inline]
	fn addr(&self) -> *const () {
		self.count.as_ptr().cast_const().cast::<()>()
	}
}

unsafe impl<R, T> Handle for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	type Element = T;

	#[inline]
	unsafe fn from_raw(ptr: *mut T) -> Self {
		Shared::from_raw(ptr)
	}

	#[inline]
	fn as_mut_ptr(&self) -> *mut T {
		Shared::as_mut_ptr(self)
	}

	#[inline]
	fn is_unique(&self) -> bool {
		Shared::strong_count(self) == 1
	}

	#[inline]
	fn same_owner(&self, other: &Self) -> bool {
		Shared::ptr_eq(self, other)
	}
}

impl<R, T> Clone for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn clone(&self) -> Self {
		//  A new handle is made from an existing one, so no synchronization is
		//  required to order the increment.
		let old = self.counter().fetch_add(1, Ordering::Relaxed);
		//  Leaked clones must never wrap the count back to zero.
		if old > MAX_COUNT {
			overflow();
		}
		Self {
			ptr: self.ptr,
			count: self.count,
			_own: PhantomData,
		}
	}
}

impl<R, T> Drop for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	fn drop(&mut self) {
		if self.counter().fetch_sub(1, Ordering::Release) != 1 {
			return;
		}
		atomic::fence(Ordering::Acquire);
		unsafe {
			drop(Box::from_raw(self.ptr.as_ptr()));
			drop(Box::from_raw(self.count.as_ptr()));
		}
	}
}

impl<R, T> From<Box<T>> for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn from(boxed: Box<T>) -> Self {
		unsafe { Self::from_raw(Box::into_raw(boxed)) }
	}
}

impl<R, T> Default for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: Default,
{
	#[inline]
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<R, T> Eq for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
}

impl<R, T> Ord for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn cmp(&self, rhs: &Self) -> cmp::Ordering {
		self.addr().cmp(&rhs.addr())
	}
}

impl<R, T> PartialEq for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn eq(&self, rhs: &Self) -> bool {
		self.addr() == rhs.addr()
	}
}

impl<R, T> PartialOrd for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn partial_cmp(&self, rhs: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(rhs))
	}
}

impl<R, T> Hash for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	#[inline]
	fn hash<S>(&self, hasher: &mut S)
	where S: Hasher {
		self.addr().hash(hasher)
	}
}

impl<R, T> Debug for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("Shared")
			.field("ptr", &self.ptr.fmt_pointer())
			.field("strong", &Self::strong_count(self))
			.finish()
	}
}

impl<R, T> Pointer for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized,
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Pointer::fmt(&self.ptr, fmt)
	}
}

/// Handles may cross threads only when the counter is itself shareable, and
/// the pointee may be reached from every thread holding a clone.
unsafe impl<R, T> Send for Shared<R, T>
where
	R: Radium<Item = usize> + Send + Sync,
	T: ?Sized + Send + Sync,
{
}

unsafe impl<R, T> Sync for Shared<R, T>
where
	R: Radium<Item = usize> + Send + Sync,
	T: ?Sized + Send + Sync,
{
}
