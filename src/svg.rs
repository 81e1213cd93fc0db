use crate::dict::{Dictionary, Exact};
use tracing::trace;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{Document, Element, SvgGraphicsElement};

/// Finds the SVG text element whose content should be rewritten.
///
/// The positional assumption lives behind this type so it can be swapped without
/// touching the rebuild logic.
pub type Locator = fn(&Document) -> Option<Element>;

/// Default locator: the second `<text>` element in document order.
///
/// On the game-PIN screen the first `<text>` is decorative and the second carries the
/// countdown label. There is no stable identifier to hook onto, so position it is.
#[must_use]
pub fn second_text_element(document: &Document) -> Option<Element> {
	let texts = document.get_elements_by_tag_name("text");
	if texts.length() < 2 {
		return None;
	}
	texts.item(1)
}

/// Rewrites the located vector text as individually positioned single-character
/// elements, centered on the original anchor.
///
/// The parent's full text (line breaks stripped) is looked up in the exact table only;
/// no match, a missing element, or a missing parent is a silent no-op. On a match the
/// original element's serialized markup becomes the template for one clone per
/// replacement character. A blanked match still clears the parent and draws nothing;
/// the now-empty text no longer matches on later passes.
pub fn rewrite(document: &Document, locate: Locator, dictionary: &Dictionary) {
	let element = match locate(document) {
		Some(element) => element,
		None => return,
	};
	let parent = match element.parent_element() {
		Some(parent) => parent,
		None => return,
	};
	let raw = match parent.text_content() {
		Some(raw) => raw,
		None => return,
	};
	let label: String = raw.chars().filter(|&c| c != '\r' && c != '\n').collect();
	let replacement = match dictionary.exact(&label) {
		Exact::Miss => return,
		Exact::Translated(target) => target,
		Exact::Blanked => "",
	};

	// Serialize the emptied element as the markup template for each character clone.
	remove_children(&element);
	let template = element.outer_html();
	remove_children(&parent);

	let mut glyphs = Vec::with_capacity(replacement.chars().count());
	let mut total_width = 0.0_f32;
	let mut buffer = [0_u8; 4];
	for c in replacement.chars() {
		if parent.insert_adjacent_html("beforeend", &template).is_err() {
			return;
		}
		let glyph = match parent.last_element_child() {
			Some(glyph) => glyph,
			None => return,
		};
		glyph.set_text_content(Some(c.encode_utf8(&mut buffer)));
		let glyph = match glyph.dyn_into::<SvgGraphicsElement>() {
			Ok(glyph) => glyph,
			Err(_) => return,
		};
		// Measured bounding-box widths come out at double the visual width here;
		// halving them is what lines the characters up correctly.
		total_width += glyph.get_b_box().map(|r| r.width()).unwrap_or(0.0) / 2.0;
		glyphs.push(glyph);
	}

	// Center the run: start half the total width left of the anchor and advance by
	// each character's own corrected width.
	let mut x = -(total_width / 2.0);
	for glyph in &glyphs {
		let width = glyph.get_b_box().map(|r| r.width()).unwrap_or(0.0) / 2.0;
		if let Ok(transform) = glyph.transform().base_val().get_item(0) {
			transform.matrix().set_e(x);
		}
		x += width;
	}

	trace!(label = %label, glyphs = glyphs.len(), "rebuilt vector text");
}

fn remove_children(element: &Element) {
	while let Some(child) = element.first_child() {
		let _ = element.remove_child(&child).unwrap_throw();
	}
}
