/*! Const-propagating ownership handles.

A type that keeps its private state behind an owned pointer (the
pointer-to-implementation pattern) wants its `&self` methods to see that state
as read-only and its `&mut self` methods to see it as writable. Whether that
holds depends on the handle: a handle whose own access primitive hands out a
writable pointer through a shared borrow (as C++ `unique_ptr` and `shared_ptr`
do, and as a raw `*mut T` field does) loses the read-only-ness of the
enclosing method after one level of indirection.

[`DeepConstPtr`] wraps such a handle and restores it. Reached through `&`, it
yields only `&T` and `*const T`; reached through `&mut`, it yields `&mut T` and
`*mut T`. The receiver type makes the choice, so the borrow checker enforces it
and there is nothing to decide at run time.

```rust
use deep_const_ptr::prelude::*;

struct Counter {
  d: DeepConstPtr<Unique<CounterPrivate>>,
}

struct CounterPrivate {
  hits: u32,
}

impl Counter {
  fn hit(&mut self) {
    self.d.hits += 1;
  }

  fn hits(&self) -> u32 {
    self.d.hits
  }
}

let mut counter = Counter { d: DeepConstPtr::new(CounterPrivate { hits: 0 }) };
counter.hit();
counter.hit();
assert_eq!(counter.hits(), 2);
```

The adaptor is generic over the [`Handle`] trait. This crate provides two
handles with the C++ smart-pointer shape: [`Unique`], which owns its pointee
alone, and [`Shared`] (as [`SharedRc`] or [`SharedArc`]), which counts its
owners. Everything other than pointee access (construction, drop, cloning,
counting, thread safety) belongs to the wrapped handle and passes through
unchanged.

# Features

- `std` (default): links the standard library. Without it the crate is
  `no_std` and needs only `alloc`. [`NullError`] implements
  `core::error::Error` either way.
- `serde`: serializes handles as their pointee.
- `tracing`: emits a `TRACE` event on every access through a [`DeepConstPtr`].
  Off by default; without it the access paths contain no instrumentation.

[`DeepConstPtr`]: crate::deep::DeepConstPtr
[`Handle`]: crate::handle::Handle
[`NullError`]: crate::handle::NullError
[`Shared`]: crate::shared::Shared
[`SharedArc`]: crate::shared::SharedArc
[`SharedRc`]: crate::shared::SharedRc
[`Unique`]: crate::unique::Unique
!*/

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod trace;

pub mod deep;
pub mod handle;
pub mod prelude;
pub mod shared;
pub mod unique;

#[cfg(feature = "serde")]
mod serdes;
