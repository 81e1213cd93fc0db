#![cfg(target_arch = "wasm32")]

use kahoot_islenska::{dict::Dictionary, overlay::Overlay, svg};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
	window().unwrap().document().unwrap().body().unwrap()
}

async fn settle() {
	// A few tick intervals' worth of real time.
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 50)
			.unwrap();
	});
	JsFuture::from(promise).await.unwrap();
}

fn paragraphs(body: &HtmlElement) -> Vec<Element> {
	let children = body.children();
	(0..children.length()).map(|i| children.item(i).unwrap()).collect()
}

#[wasm_bindgen_test]
fn manual_pass_translates_without_the_timer() {
	let body = body();
	body.set_inner_html("<p>Next</p>");

	let overlay = Overlay::new(Dictionary::icelandic(), svg::second_text_element);
	overlay.run_pass();

	assert_eq!(body.text_content().unwrap(), "Næst");
}

#[wasm_bindgen_test]
async fn scheduled_passes_translate_until_stopped() {
	let body = body();
	body.set_inner_html("<p>Start</p><p>Foo</p>");

	let mut overlay = Overlay::new(Dictionary::icelandic(), svg::second_text_element);
	overlay.start();
	assert!(overlay.is_running());

	settle().await;
	let paragraphs = paragraphs(&body);
	assert_eq!(paragraphs[0].text_content().unwrap(), "Byrja");
	assert_eq!(paragraphs[1].text_content().unwrap(), "Foo");

	overlay.stop();
	assert!(!overlay.is_running());

	// Mapped text injected after stopping is never touched again.
	paragraphs[0].set_text_content(Some("Start"));
	settle().await;
	assert_eq!(paragraphs[0].text_content().unwrap(), "Start");
}

#[wasm_bindgen_test]
async fn dropping_a_running_overlay_stops_it() {
	let body = body();
	body.set_inner_html("<p>Foo</p>");

	{
		let mut overlay = Overlay::new(Dictionary::icelandic(), svg::second_text_element);
		overlay.start();
	}

	body.set_inner_html("<p>Start</p>");
	settle().await;
	assert_eq!(body.text_content().unwrap(), "Start");
}

#[wasm_bindgen_test]
fn start_is_idempotent_while_running() {
	let mut overlay = Overlay::new(Dictionary::icelandic(), svg::second_text_element);
	overlay.start();
	overlay.start();
	assert!(overlay.is_running());
	overlay.stop();
	assert!(!overlay.is_running());
}
