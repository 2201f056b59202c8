//! Which pages are projected and which node has its details open.

use std::collections::HashSet;
use std::sync::Arc;

use crate::graph::Node;
use crate::model::DocumentPage;

/// Selected page ids plus the inspected node.
///
/// The two halves are independent: narrowing the selection leaves the
/// inspected node alone even when it drops out of the projected graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
	selected: HashSet<String>,
	inspected: Option<Node>,
}

impl SelectionState {
	/// Flips membership of a page id and returns whether it is now selected.
	/// Ids that are not part of the loaded collection are accepted.
	pub fn toggle(&mut self, page_id: &str) -> bool {
		if self.selected.remove(page_id) {
			false
		} else {
			self.selected.insert(page_id.to_string());
			true
		}
	}

	/// Selects every page, or clears the selection if it already has as many
	/// entries as there are pages.
	pub fn select_all(&mut self, pages: &[Arc<DocumentPage>]) {
		if self.selected.len() == pages.len() {
			self.selected.clear();
		} else {
			self.selected = pages.iter().map(|page| page.unique_id.clone()).collect();
		}
	}

	/// Deselects everything.
	pub fn clear(&mut self) {
		self.selected.clear();
	}

	/// Whether the page id is selected.
	pub fn is_selected(&self, page_id: &str) -> bool {
		self.selected.contains(page_id)
	}

	/// Number of selected ids.
	pub fn len(&self) -> usize {
		self.selected.len()
	}

	/// Whether nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.selected.is_empty()
	}

	/// Selected pages in collection order.
	pub fn selected_pages(&self, pages: &[Arc<DocumentPage>]) -> Vec<Arc<DocumentPage>> {
		pages
			.iter()
			.filter(|page| self.is_selected(&page.unique_id))
			.cloned()
			.collect()
	}

	/// Node whose details are open.
	pub fn inspected(&self) -> Option<&Node> {
		self.inspected.as_ref()
	}

	/// Opens the details of a node, or closes them with `None`.
	pub fn set_inspected(&mut self, node: Option<Node>) {
		self.inspected = node;
	}

	/// Back to the startup state: nothing selected, nothing inspected.
	pub fn reset(&mut self) {
		self.selected.clear();
		self.inspected = None;
	}
}
