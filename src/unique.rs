/*! An exclusively-owning handle.

[`Unique`] owns one heap pointee and frees it on drop, like [`Box`], but its
access primitive is the raw-pointer kind: a shared borrow of the handle hands
out `*mut T`. On its own it therefore does not propagate read-only-ness; it is
meant to be held inside a [`DeepConstPtr`].

[`Box`]: alloc::boxed::Box
[`DeepConstPtr`]: crate::deep::DeepConstPtr
!*/

use alloc::boxed::Box;
use core::{
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
};

use tap::Pipe;
use wyz::fmt::FmtForward;

use crate::handle::{
	Exclusive,
	Handle,
	NullError,
};

/** A move-only owning handle.

# Original

[`std::unique_ptr<T>`](https://en.cppreference.com/w/cpp/memory/unique_ptr)

# API Differences

`unique_ptr` may be empty. `Unique` is never null; an empty slot is spelled
`Option<Unique<T>>`, which costs no space.

`unique_ptr::operator->() const` returns `T*`. The equivalent here is
[`Unique::as_mut_ptr`], which takes `&Self` and returns `*mut T`. There is no
`Deref`; safe access goes through [`DeepConstPtr`].

Comparison and hashing use the pointee address, as for `Box`. Every zero-sized
pointee shares one dangling address, so all `Unique<()>` compare equal; use
[`Handle::same_owner`] to tell handles apart.

[`DeepConstPtr`]: crate::deep::DeepConstPtr
**/
#[repr(transparent)]
pub struct Unique<T>
where T: ?Sized
{
	/// Produced by `Box::into_raw`.
	ptr: NonNull<T>,
	/// `Unique` owns a `T` for drop-check purposes.
	_own: PhantomData<T>,
}

impl<T> Unique<T> {
	/// Moves `value` onto the heap and takes ownership of it.
	#[inline]
	pub fn new(value: T) -> Self {
		Box::new(value).pipe(Self::from)
	}
}

impl<T> Unique<T>
where T: ?Sized
{
	/// Takes ownership of a heap-allocated pointee.
	///
	/// # Safety
	///
	/// `ptr` must be non-null, must have been produced by [`Box::into_raw`],
	/// and must not be owned by anything else.
	///
	/// [`Box::into_raw`]: alloc::boxed::Box::into_raw
	#[inline]
	pub unsafe fn from_raw(ptr: *mut T) -> Self {
		Self {
			ptr: NonNull::new_unchecked(ptr),
			_own: PhantomData,
		}
	}

	/// Takes ownership of a heap-allocated pointee, refusing the null pointer.
	///
	/// # Safety
	///
	/// As [`Self::from_raw`], except that `ptr` may be null.
	#[inline]
	pub unsafe fn try_from_raw(ptr: *mut T) -> Result<Self, NullError> {
		let ptr = NonNull::new(ptr).ok_or(NullError::Null)?;
		Ok(Self {
			ptr,
			_own: PhantomData,
		})
	}

	/// Releases ownership of the pointee without freeing it.
	///
	/// The pointer must eventually be given back to [`Self::from_raw`] or
	/// [`Box::from_raw`] to avoid a leak.
	///
	/// [`Box::from_raw`]: alloc::boxed::Box::from_raw
	#[inline]
	pub fn into_raw(this: Self) -> *mut T {
		this.pipe(ManuallyDrop::new).ptr.as_ptr()
	}

	/// Converts back into an ordinary [`Box`].
	///
	/// [`Box`]: alloc::boxed::Box
	#[inline]
	pub fn into_box(this: Self) -> Box<T> {
		unsafe { Box::from_raw(Self::into_raw(this)) }
	}

	/// The address of the pointee, writable regardless of how `this` is
	/// borrowed.
	#[inline]
	pub fn as_mut_ptr(this: &Self) -> *mut T {
		this.ptr.as_ptr()
	}

	/// The pointee address, without any pointer metadata.
	#[inline]
	fn addr(&self) -> *const () {
		self.ptr.as_ptr().cast_const().cast::<()>()
	}
}

unsafe impl<T> Handle for Unique<T>
where T: ?Sized
{
	type Element = T;

	#[inline]
	unsafe fn from_raw(ptr: *mut T) -> Self {
		Unique::from_raw(ptr)
	}

	#[inline]
	fn as_mut_ptr(&self) -> *mut T {
		Unique::as_mut_ptr(self)
	}

	#[inline]
	fn is_unique(&self) -> bool {
		true
	}

	/// A `Unique` shares its pointee with no other handle, so only a handle
	/// and itself own together.
	#[inline]
	fn same_owner(&self, other: &Self) -> bool {
		ptr::eq(self, other)
	}
}

unsafe impl<T> Exclusive for Unique<T> where T: ?Sized
{
}

impl<T> Drop for Unique<T>
where T: ?Sized
{
	#[inline]
	fn drop(&mut self) {
		drop(unsafe { Box::from_raw(self.ptr.as_ptr()) });
	}
}

impl<T> From<Box<T>> for Unique<T>
where T: ?Sized
{
	#[inline]
	fn from(boxed: Box<T>) -> Self {
		unsafe { Self::from_raw(Box::into_raw(boxed)) }
	}
}

impl<T> Default for Unique<T>
where T: Default
{
	#[inline]
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T> Eq for Unique<T>
where T: ?Sized
{
}

impl<T> Ord for Unique<T>
where T: ?Sized
{
	#[inline]
	fn cmp(&self, rhs: &Self) -> cmp::Ordering {
		self.addr().cmp(&rhs.addr())
	}
}

impl<T> PartialEq for Unique<T>
where T: ?Sized
{
	#[inline]
	fn eq(&self, rhs: &Self) -> bool {
		self.addr() == rhs.addr()
	}
}

impl<T> PartialOrd for Unique<T>
where T: ?Sized
{
	#[inline]
	fn partial_cmp(&self, rhs: &Self) -> Option<cmp::Ordering> {
		Some(self.cmp(rhs))
	}
}

impl<T> Hash for Unique<T>
where T: ?Sized
{
	#[inline]
	fn hash<S>(&self, hasher: &mut S)
	where S: Hasher {
		self.addr().hash(hasher)
	}
}

impl<T> Debug for Unique<T>
where T: ?Sized
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_tuple("Unique")
			.field(&self.ptr.fmt_pointer())
			.finish()
	}
}

impl<T> Pointer for Unique<T>
where T: ?Sized
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Pointer::fmt(&self.ptr, fmt)
	}
}

/// `Unique` is `Send` and `Sync` under the same conditions as `Box`.
unsafe impl<T> Send for Unique<T> where T: ?Sized + Send
{
}

unsafe impl<T> Sync for Unique<T> where T: ?Sized + Sync
{
}
