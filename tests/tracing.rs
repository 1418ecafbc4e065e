/*! The access trace is opt-in.

With the `tracing` feature, every access through a `DeepConstPtr` emits one
`TRACE` event carrying the qualification it resolved to.
!*/

#![cfg(feature = "tracing")]

use std::sync::{
	Arc,
	Mutex,
};

use deep_const_ptr::prelude::*;
use tracing::{
	field::{
		Field,
		Visit,
	},
	Event,
	Subscriber,
};
use tracing_subscriber::{
	layer::{
		Context,
		Layer,
		SubscriberExt,
	},
	Registry,
};

/// Records the `access` field of every event it sees.
#[derive(Clone, Default)]
struct Accesses(Arc<Mutex<Vec<String>>>);

struct AccessVisitor<'a>(&'a mut Vec<String>);

impl Visit for AccessVisitor<'_> {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "access" {
			self.0.push(value.to_owned());
		}
	}

	fn record_debug(&mut self, _: &Field, _: &dyn std::fmt::Debug) {}
}

impl<S> Layer<S> for Accesses
where S: Subscriber
{
	fn on_event(&self, event: &Event<'_>, _: Context<'_, S>) {
		let mut seen = self.0.lock().expect("poisoned");
		event.record(&mut AccessVisitor(&mut seen));
	}
}

#[test]
fn every_access_is_traced() {
	let accesses = Accesses::default();
	let subscriber = Registry::default().with(accesses.clone());

	tracing::subscriber::with_default(subscriber, || {
		let mut ptr = DeepConstPtr::<Unique<u8>>::new(1);
		*ptr += 1;
		assert_eq!(*ptr, 2);
		let _ = DeepConstPtr::as_ptr(&ptr);
		let _ = DeepConstPtr::get_mut(&mut ptr);
	});

	let seen = accesses.0.lock().expect("poisoned");
	assert_eq!(*seen, ["mut", "const", "const", "mut"]);
}
