#![warn(clippy::pedantic)]

//! Best-effort Icelandic overlay for Kahoot! gameplay.
//!
//! Kahoot! ships no Icelandic UI, so this crate rewrites the rendered English text in
//! place as the page mutates: a recurring pass walks every text node and input
//! placeholder under `<body>`, replaces whatever the [dictionary](dict::Dictionary)
//! knows, and rebuilds the per-character SVG countdown text on the game-PIN screen.
//! It never touches the app's own state or network traffic; it is a read/write overlay
//! on rendered output only.
//!
//! The pass starts on the window `load` event and repeats until `stopReplacing()` is
//! called from the console.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod dict;

#[cfg(target_arch = "wasm32")]
pub mod overlay;
#[cfg(target_arch = "wasm32")]
pub mod rewrite;
#[cfg(target_arch = "wasm32")]
pub mod svg;
#[cfg(target_arch = "wasm32")]
pub mod walk;

#[cfg(target_arch = "wasm32")]
mod boot {
	use crate::{dict::Dictionary, overlay::Overlay, svg};
	use std::cell::RefCell;
	use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsCast, UnwrapThrowExt};

	thread_local! {
		static OVERLAY: RefCell<Option<Overlay>> = RefCell::new(None);
	}

	/// Waits for the page to finish loading, then starts the recurring rewrite pass.
	#[wasm_bindgen(start)]
	pub fn start() {
		// The test harness instantiates this module too, so a subscriber may exist.
		let _ = tracing_wasm::try_set_as_global_default();

		let window = web_sys::window().expect_throw("kahoot-islenska: no `window`");
		let on_load = Closure::wrap(Box::new(|| {
			OVERLAY.with(|slot| {
				let mut overlay = Overlay::new(Dictionary::icelandic(), svg::second_text_element);
				overlay.start();
				*slot.borrow_mut() = Some(overlay);
			});
		}) as Box<dyn FnMut()>);
		window
			.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
			.expect_throw("kahoot-islenska: could not listen for `load`");
		on_load.forget();
	}

	/// Halts all further passes. Reachable from the developer console as
	/// `stopReplacing()`; a fresh page load is the only way to start again.
	#[wasm_bindgen(js_name = stopReplacing)]
	pub fn stop_replacing() {
		OVERLAY.with(|slot| {
			if let Some(overlay) = slot.borrow_mut().as_mut() {
				overlay.stop();
			}
		});
	}
}
