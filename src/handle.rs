/*! The contract between [`DeepConstPtr`] and the handle it wraps.

A *handle* is any type that owns one pointee, exclusively or co-operatively,
and whose own access primitive yields a writable pointer through a shared
borrow. That primitive is exactly the shape that loses the read-only-ness of
the context holding the handle: `&Handle` is enough to reach `*mut Element`.

[`DeepConstPtr`] is generic over this trait, and only ever calls the
primitive on behalf of a context whose qualification it has already checked.

[`DeepConstPtr`]: crate::deep::DeepConstPtr
!*/

use thiserror::Error;

/** An ownership handle that the adaptor can wrap.

# Original

The requirements a C++ `deep_const_ptr<P>` places on its base class `P`: a
constructor from `P::element_type*`, a nested `element_type`, and
`element_type* operator->() const`.

# Safety

Implementors guarantee that:

- [`as_mut_ptr`] returns the non-null, well-aligned address of a live
  `Element`, and returns the same address for as long as the handle (or any
  handle co-owning the pointee) lives. The pointer carries write provenance.
- No safe operation of the handle produces a reference to the pointee that can
  outlive a borrow of the handle itself.
- While [`is_unique`] reports `true`, a caller holding `&mut` to the handle is
  the only path by which the pointee can be observed.
- [`from_raw`] accepts any pointer produced by [`Box::into_raw`] and takes
  ownership of it.

[`Box::into_raw`]: alloc::boxed::Box::into_raw
[`as_mut_ptr`]: Self::as_mut_ptr
[`from_raw`]: Self::from_raw
[`is_unique`]: Self::is_unique
**/
pub unsafe trait Handle {
	/// The type of the owned pointee.
	type Element: ?Sized;

	/// Takes ownership of a heap-allocated pointee.
	///
	/// # Safety
	///
	/// `ptr` must have been produced by [`Box::into_raw`], must not be owned
	/// by anything else, and must not be used by the caller afterwards.
	///
	/// [`Box::into_raw`]: alloc::boxed::Box::into_raw
	unsafe fn from_raw(ptr: *mut Self::Element) -> Self
	where Self: Sized;

	/// The handle's own access primitive.
	///
	/// This does not consult the qualification of the borrow it is called
	/// through: a shared borrow of the handle yields a writable pointer.
	fn as_mut_ptr(&self) -> *mut Self::Element;

	/// Tests whether this handle is currently the only owner of its pointee.
	fn is_unique(&self) -> bool;

	/// Tests whether two handles own their pointee together.
	///
	/// Pointee addresses cannot answer this: every zero-sized pointee sits at
	/// the same dangling address.
	fn same_owner(&self, other: &Self) -> bool
	where Self: Sized;
}

/** A handle that is always the sole owner of its pointee.

# Safety

[`Handle::is_unique`] must return `true` for every value of the implementing
type, so that `&mut` to the handle is `&mut` to the pointee.
**/
pub unsafe trait Exclusive: Handle {}

/// An error produced by the checked constructors of the crate's handles.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, Ord, PartialEq, PartialOrd)]
pub enum NullError {
	/// The handles in this crate cannot own the null pointer.
	#[error("`deep_const_ptr` handles will not take ownership of the null pointer")]
	Null,
}
