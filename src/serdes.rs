/*! `serde`-powered de/serialization

The handles serialize as their pointee and deserialize by allocating a fresh
one, the same way `Box<T>` does. `DeepConstPtr` serializes as whatever handle
it wraps.
!*/

#![cfg(feature = "serde")]

use alloc::boxed::Box;

use radium::Radium;
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};
use tap::Pipe;

use crate::{
	deep::DeepConstPtr,
	handle::Handle,
	shared::Shared,
	unique::Unique,
};

impl<T> Serialize for Unique<T>
where T: ?Sized + Serialize
{
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		unsafe { &*Unique::as_mut_ptr(self) }.serialize(serializer)
	}
}

impl<'de, T> Deserialize<'de> for Unique<T>
where T: Deserialize<'de>
{
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		Box::<T>::deserialize(deserializer).map(Self::from)
	}
}

impl<R, T> Serialize for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: ?Sized + Serialize,
{
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		unsafe { &*Shared::as_mut_ptr(self) }.serialize(serializer)
	}
}

impl<'de, R, T> Deserialize<'de> for Shared<R, T>
where
	R: Radium<Item = usize>,
	T: Deserialize<'de>,
{
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		Box::<T>::deserialize(deserializer).map(Self::from)
	}
}

impl<H> Serialize for DeepConstPtr<H>
where H: Handle + Serialize
{
	#[inline]
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		DeepConstPtr::handle(self).serialize(serializer)
	}
}

impl<'de, H> Deserialize<'de> for DeepConstPtr<H>
where H: Handle + Deserialize<'de>
{
	#[inline]
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		H::deserialize(deserializer)?
			.pipe(DeepConstPtr::from_handle)
			.pipe(Ok)
	}
}
