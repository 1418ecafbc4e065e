/*! Forwarded trait implementations for `DeepConstPtr`.

Comparison, hashing, cloning, and defaulting are the wrapped handle's. Views of
the pointee follow the same qualification rule as the access paths: shared
views for every handle, exclusive views only for exclusive handles.
!*/

use core::{
	cmp::Ordering,
	fmt::{
		self,
		Debug,
		Display,
		Formatter,
		Pointer,
	},
	hash::{
		Hash,
		Hasher,
	},
};

use super::DeepConstPtr;
use crate::handle::{
	Exclusive,
	Handle,
};

impl<H> Clone for DeepConstPtr<H>
where H: Handle + Clone
{
	#[inline]
	fn clone(&self) -> Self {
		Self::from_handle(self.inner.clone())
	}
}

impl<H> Default for DeepConstPtr<H>
where H: Handle + Default
{
	#[inline]
	fn default() -> Self {
		Self::from_handle(H::default())
	}
}

impl<H> Eq for DeepConstPtr<H> where H: Handle + Eq
{
}

impl<H> Ord for DeepConstPtr<H>
where H: Handle + Ord
{
	#[inline]
	fn cmp(&self, rhs: &Self) -> Ordering {
		self.inner.cmp(&rhs.inner)
	}
}

impl<H> PartialEq for DeepConstPtr<H>
where H: Handle + PartialEq
{
	#[inline]
	fn eq(&self, rhs: &Self) -> bool {
		self.inner == rhs.inner
	}
}

impl<H> PartialOrd for DeepConstPtr<H>
where H: Handle + PartialOrd
{
	#[inline]
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		self.inner.partial_cmp(&rhs.inner)
	}
}

impl<H> Hash for DeepConstPtr<H>
where H: Handle + Hash
{
	#[inline]
	fn hash<S>(&self, hasher: &mut S)
	where S: Hasher {
		self.inner.hash(hasher)
	}
}

impl<H> AsRef<H::Element> for DeepConstPtr<H>
where H: Handle
{
	#[inline]
	fn as_ref(&self) -> &H::Element {
		self
	}
}

impl<H> AsMut<H::Element> for DeepConstPtr<H>
where H: Exclusive
{
	#[inline]
	fn as_mut(&mut self) -> &mut H::Element {
		self
	}
}

impl<H> From<H> for DeepConstPtr<H>
where H: Handle
{
	#[inline]
	fn from(handle: H) -> Self {
		Self::from_handle(handle)
	}
}

impl<H> Debug for DeepConstPtr<H>
where H: Handle + Debug
{
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_tuple("DeepConstPtr").field(&self.inner).finish()
	}
}

impl<H> Display for DeepConstPtr<H>
where
	H: Handle,
	H::Element: Display,
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Display::fmt(&**self, fmt)
	}
}

impl<H> Pointer for DeepConstPtr<H>
where H: Handle + Pointer
{
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		Pointer::fmt(&self.inner, fmt)
	}
}
