use crate::{dict::Dictionary, rewrite, svg, walk};
use std::rc::Rc;
use tracing::{instrument, trace, warn};
use wasm_bindgen::{closure::Closure, JsCast, UnwrapThrowExt};
use web_sys::Document;

/// Interval between rewrite passes, in milliseconds.
const TICK_MILLIS: i32 = 5;

/// One full rewrite pass: every text-bearing node under `<body>`, then the vector text.
///
/// Runs synchronously to completion. Already-translated content no longer matches the
/// dictionary, so repeated passes settle into pure no-ops.
#[instrument(skip_all)]
pub fn run_pass(document: &Document, dictionary: &Dictionary, locate: svg::Locator) {
	let body = match document.body() {
		Some(body) => body,
		None => return,
	};
	let units = walk::collect(body.as_ref());
	let mut rewritten = 0_usize;
	for unit in &units {
		if rewrite::rewrite(unit, dictionary) {
			rewritten += 1;
		}
	}
	trace!(collected = units.len(), rewritten, "text pass complete");
	svg::rewrite(document, locate, dictionary);
}

/// Owns the dictionary, the target locator, and the recurring timer.
///
/// [`start`](Self::start) schedules a pass every [`TICK_MILLIS`] milliseconds;
/// [`stop`](Self::stop) clears the timer between ticks, after which the overlay stays
/// idle until a fresh page load constructs a new one. Dropping a running overlay stops
/// it.
pub struct Overlay {
	dictionary: Rc<Dictionary>,
	locate: svg::Locator,
	tick: Option<Closure<dyn FnMut()>>,
	timer: Option<i32>,
}

impl Overlay {
	#[must_use]
	pub fn new(dictionary: Dictionary, locate: svg::Locator) -> Self {
		Self {
			dictionary: Rc::new(dictionary),
			locate,
			tick: None,
			timer: None,
		}
	}

	/// Starts the recurring pass. Idempotent while running.
	pub fn start(&mut self) {
		if self.timer.is_some() {
			return;
		}
		let dictionary = Rc::clone(&self.dictionary);
		let locate = self.locate;
		let tick = Closure::wrap(Box::new(move || {
			if let Some(document) = web_sys::window().and_then(|window| window.document()) {
				run_pass(&document, &dictionary, locate);
			}
		}) as Box<dyn FnMut()>);
		let window = web_sys::window().expect_throw("kahoot-islenska: no `window` to schedule on");
		let timer = window
			.set_interval_with_callback_and_timeout_and_arguments_0(tick.as_ref().unchecked_ref(), TICK_MILLIS)
			.unwrap_throw();
		self.tick = Some(tick);
		self.timer = Some(timer);
		trace!(timer, "overlay started");
	}

	/// Clears the timer. No pass runs after this returns; restarting requires a fresh
	/// [`start`](Self::start).
	pub fn stop(&mut self) {
		if let Some(timer) = self.timer.take() {
			match web_sys::window() {
				Some(window) => window.clear_interval_with_handle(timer),
				None => warn!(timer, "no `window` to clear the interval on"),
			}
			trace!(timer, "overlay stopped");
		}
		self.tick = None;
	}

	#[must_use]
	pub fn is_running(&self) -> bool {
		self.timer.is_some()
	}

	/// Runs a single pass immediately, without the timer.
	pub fn run_pass(&self) {
		if let Some(document) = web_sys::window().and_then(|window| window.document()) {
			run_pass(&document, &self.dictionary, self.locate);
		}
	}
}

impl Drop for Overlay {
	fn drop(&mut self) {
		self.stop();
	}
}
