/*! Symbol export.

This module collects the public API into a single spot for inclusion, as
`use deep_const_ptr::prelude::*;`, without polluting the root namespace of the
crate.
!*/

pub use crate::{
	deep::DeepConstPtr,
	handle::{
		Exclusive,
		Handle,
		NullError,
	},
	shared::{
		Shared,
		SharedArc,
		SharedRc,
	},
	unique::Unique,
};
