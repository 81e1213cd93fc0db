#![cfg(target_arch = "wasm32")]

use kahoot_islenska::walk::{self, TextUnit};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn body() -> HtmlElement {
	window().unwrap().document().unwrap().body().unwrap()
}

fn texts_of(units: &[TextUnit]) -> Vec<String> {
	units
		.iter()
		.map(|unit| match unit {
			TextUnit::Text(text) => text.data(),
			TextUnit::Placeholder(input) => input.placeholder(),
		})
		.collect()
}

#[wasm_bindgen_test]
fn collects_text_and_placeholders_in_document_order() {
	let body = body();
	body.set_inner_html(
		"<div>one<span>two<input placeholder=\"three\"></span></div>four<input placeholder=\"five\">",
	);

	let units = walk::collect(body.as_ref());
	assert_eq!(texts_of(&units), ["one", "two", "three", "four", "five"]);
}

#[wasm_bindgen_test]
fn collects_every_unit_exactly_once_at_any_depth() {
	let body = body();
	body.set_inner_html("<div><div><div><p>deep</p></div></div><input placeholder=\"shallow\"></div>");

	let units = walk::collect(body.as_ref());
	assert_eq!(texts_of(&units), ["deep", "shallow"]);
}

#[wasm_bindgen_test]
fn inputs_are_collected_even_with_an_empty_placeholder() {
	let body = body();
	body.set_inner_html("<input><input placeholder=\"\">");

	let units = walk::collect(body.as_ref());
	assert_eq!(units.len(), 2);
	assert!(units.iter().all(|unit| matches!(unit, TextUnit::Placeholder(_))));
}

#[wasm_bindgen_test]
fn comments_and_empty_elements_are_skipped() {
	let body = body();
	body.set_inner_html("<!-- nope --><div></div>x");

	let units = walk::collect(body.as_ref());
	assert_eq!(texts_of(&units), ["x"]);
}
