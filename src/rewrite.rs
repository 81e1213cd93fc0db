use crate::{dict::Dictionary, walk::TextUnit};

/// Applies `dictionary` to a single text-bearing unit, writing back only on change.
///
/// Returns whether the document was written to. Null or empty content is skipped, and
/// unchanged translations never touch the node, so a pass over an already-translated
/// document performs no writes at all.
pub fn rewrite(unit: &TextUnit, dictionary: &Dictionary) -> bool {
	match unit {
		TextUnit::Text(node) => {
			let text = match node.text_content() {
				Some(text) if !text.is_empty() => text,
				_ => return false,
			};
			let translated = dictionary.translate(&text);
			if translated == text {
				return false;
			}
			node.set_text_content(Some(&translated));
			true
		}
		TextUnit::Placeholder(input) => {
			let text = input.placeholder();
			if text.is_empty() {
				return false;
			}
			let translated = dictionary.translate(&text);
			if translated == text {
				return false;
			}
			input.set_placeholder(&translated);
			true
		}
	}
}
