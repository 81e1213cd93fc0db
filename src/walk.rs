use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::{HtmlInputElement, Node, Text};

/// A text-bearing unit of the rendered document, with its kind resolved once at
/// collection time.
#[derive(Debug, Clone)]
pub enum TextUnit {
	/// A raw text node.
	Text(Text),
	/// An input element whose placeholder is the visible text.
	Placeholder(HtmlInputElement),
}

impl TextUnit {
	/// Classifies `node`, or returns [`None`] for anything that should be descended into
	/// instead of collected.
	#[must_use]
	pub fn of(node: &Node) -> Option<Self> {
		if let Some(text) = node.dyn_ref::<Text>() {
			Some(Self::Text(text.clone()))
		} else if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
			Some(Self::Placeholder(input.clone()))
		} else {
			None
		}
	}
}

/// Collects every text-bearing unit under `root` in document order.
///
/// Collected nodes are not descended into; everything else is traversed recursively.
/// Pure traversal, no mutation.
#[must_use]
pub fn collect(root: &Node) -> Vec<TextUnit> {
	let mut units = Vec::new();
	collect_into(root, &mut units);
	units
}

fn collect_into(parent: &Node, units: &mut Vec<TextUnit>) {
	let child_nodes = parent.child_nodes();
	for i in 0..child_nodes.length() {
		let node = child_nodes.get(i).unwrap_throw();
		match TextUnit::of(&node) {
			Some(unit) => units.push(unit),
			None => collect_into(&node, units),
		}
	}
}
