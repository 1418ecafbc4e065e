/*! Access diagnostics.

Every pointee access made through a [`DeepConstPtr`] can report itself as a
`TRACE`-level event. The reports exist only when the crate is built with the
`tracing` feature; otherwise the macros in this module expand to nothing and
the access paths are exactly the wrapped handle's.

Events use the `deep_const_ptr` target and carry two fields: `handle`, the
wrapped handle's type name, and `access`, either `"const"` or `"mut"`.

[`DeepConstPtr`]: crate::deep::DeepConstPtr
!*/

#![allow(unused_macros, unused_imports)]

/// Trace-level event. Compiles to nothing without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
	($($arg:tt)*) => {
		::tracing::trace!(target: "deep_const_ptr", $($arg)*)
	};
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
	($($arg:tt)*) => {};
}

/// Reports one access through the adaptor, naming the handle type and which
/// qualification the access was resolved to.
macro_rules! trace_access {
	($handle:ty, $kind:literal) => {
		$crate::trace::trace_log!(
			handle = ::core::any::type_name::<$handle>(),
			access = $kind,
			"DeepConstPtr access"
		)
	};
}

pub(crate) use trace_access;
pub(crate) use trace_log;
