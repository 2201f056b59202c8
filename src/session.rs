//! Session state owned by the UI: loaded pages, selection, load progress.
//!
//! The browser event loop is the only actor. Every handler takes the
//! [`Session`] out of its signal, applies one operation and puts it back,
//! so no operation here ever observes a half-applied event.

use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::LoadError;
use crate::graph::{CollectionGraph, Node, project};
use crate::loader::parse_collection;
use crate::model::DocumentPage;
use crate::selection::SelectionState;

/// Progress of the current file load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
	/// No load in flight.
	#[default]
	Idle,
	/// A file is being read and parsed.
	Parsing,
}

/// Everything the visualizer remembers between events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
	pages: Vec<Arc<DocumentPage>>,
	selection: SelectionState,
	status: LoadStatus,
	error: Option<LoadError>,
}

impl Session {
	/// Loaded pages in file order.
	pub fn pages(&self) -> &[Arc<DocumentPage>] {
		&self.pages
	}

	/// Current selection and inspection.
	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	/// Progress of the current load.
	pub fn status(&self) -> LoadStatus {
		self.status
	}

	/// Whether a file is being read.
	pub fn is_loading(&self) -> bool {
		self.status == LoadStatus::Parsing
	}

	/// Failure of the most recent load attempt.
	pub fn error(&self) -> Option<&LoadError> {
		self.error.as_ref()
	}

	/// Marks a load as started. Returns `false` if one is already running.
	pub fn begin_load(&mut self) -> bool {
		if self.is_loading() {
			return false;
		}
		self.status = LoadStatus::Parsing;
		self.error = None;
		true
	}

	/// Commits the outcome of a load. On failure the previous collection stays.
	pub fn finish_load(&mut self, result: Result<Vec<DocumentPage>, LoadError>) {
		self.status = LoadStatus::Idle;
		match result {
			Ok(pages) => self.replace_collection(pages),
			Err(err) => {
				warn!("load failed: {err}");
				self.error = Some(err);
			}
		}
	}

	/// Parses `text` and commits the result in one step.
	pub fn load_text(&mut self, text: &str) {
		self.finish_load(parse_collection(text));
	}

	/// Swaps in a new collection with nothing selected or inspected.
	pub fn replace_collection(&mut self, pages: Vec<DocumentPage>) {
		info!("collection loaded: {} page(s)", pages.len());
		self.pages = pages.into_iter().map(Arc::new).collect();
		self.selection.reset();
		self.error = None;
	}

	/// Flips a page in or out of the projection.
	pub fn toggle_page(&mut self, page_id: &str) {
		let selected = self.selection.toggle(page_id);
		debug!("page {page_id} selected={selected}");
	}

	/// Select-all checkbox: all pages, or none if all are already selected.
	pub fn toggle_all(&mut self) {
		self.selection.select_all(&self.pages);
		debug!("{} page(s) selected", self.selection.len());
	}

	/// Opens the detail view for a node.
	pub fn inspect(&mut self, node: Node) {
		debug!("inspecting {}", node.id);
		self.selection.set_inspected(Some(node));
	}

	/// Closes the detail view.
	pub fn close_inspector(&mut self) {
		self.selection.set_inspected(None);
	}

	/// Pages currently projected, in file order.
	pub fn selected_pages(&self) -> Vec<Arc<DocumentPage>> {
		self.selection.selected_pages(&self.pages)
	}

	/// Projection of the selected pages.
	pub fn graph(&self) -> CollectionGraph {
		project(&self.selected_pages())
	}

	/// Whether the select-all checkbox shows as checked.
	pub fn all_selected(&self) -> bool {
		!self.pages.is_empty() && self.selection.len() == self.pages.len()
	}

	/// Caption of the select-all checkbox.
	pub fn select_all_label(&self) -> &'static str {
		if self.selection.len() == self.pages.len() {
			"Deselect All"
		} else {
			"Select All"
		}
	}

	/// Header line summarising the selection.
	pub fn status_line(&self) -> String {
		format!(
			"{} of {} page(s) selected. Click a node for details.",
			self.selected_pages().len(),
			self.pages.len()
		)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::graph::NodeKind;

	const TWO_PAGES: &str = "{\"unique_id\":\"a\",\"title\":\"A\"}\n{\"unique_id\":\"b\",\"title\":\"B\"}\n";

	fn loaded() -> Session {
		let mut session = Session::default();
		session.load_text(TWO_PAGES);
		session
	}

	#[test]
	fn starts_empty() {
		let session = Session::default();
		assert!(session.pages().is_empty());
		assert!(session.selection().is_empty());
		assert_eq!(session.status(), LoadStatus::Idle);
		assert_eq!(session.graph().nodes.len(), 1);
	}

	#[test]
	fn new_collection_starts_with_nothing_selected() {
		let mut session = loaded();
		session.toggle_all();
		session.inspect(session.graph().nodes[1].clone());
		assert_eq!(session.selection().len(), 2);

		session.load_text("{\"unique_id\":\"c\"}");
		assert_eq!(session.pages().len(), 1);
		assert!(session.selection().is_empty());
		assert!(session.selection().inspected().is_none());
	}

	#[test]
	fn failed_load_commits_nothing() {
		let mut session = loaded();
		session.toggle_page("a");

		assert!(session.begin_load());
		session.finish_load(parse_collection("{\"unique_id\":\"z\"}\n{oops"));

		assert_eq!(session.status(), LoadStatus::Idle);
		assert_eq!(session.error().and_then(LoadError::line), Some(2));
		let ids: Vec<_> = session.pages().iter().map(|p| p.unique_id.as_str()).collect();
		assert_eq!(ids, ["a", "b"]);
		assert!(session.selection().is_selected("a"));
	}

	#[test]
	fn failed_first_load_leaves_no_pages() {
		let mut session = Session::default();
		session.load_text("{\"unique_id\":\"a\"}\nnot json\n");
		assert!(session.pages().is_empty());
		assert!(session.error().is_some());
	}

	#[test]
	fn overlapping_loads_are_refused() {
		let mut session = Session::default();
		assert!(session.begin_load());
		assert!(session.is_loading());
		assert!(!session.begin_load());

		session.finish_load(Err(LoadError::Io("denied".into())));
		assert!(session.begin_load());
		assert_eq!(session.error(), None);
	}

	#[test]
	fn graph_follows_selection() {
		let mut session = loaded();
		session.toggle_page("b");
		let graph = session.graph();
		assert_eq!(graph.count(NodeKind::Page), 1);
		assert!(graph.node("page:b").is_some());
		assert_eq!(session.status_line(), "1 of 2 page(s) selected. Click a node for details.");
	}

	#[test]
	fn select_all_checkbox_state() {
		let mut session = loaded();
		assert!(!session.all_selected());
		assert_eq!(session.select_all_label(), "Select All");

		session.toggle_all();
		assert!(session.all_selected());
		assert_eq!(session.select_all_label(), "Deselect All");

		session.toggle_all();
		assert!(session.selection().is_empty());
	}

	#[test]
	fn closing_the_inspector() {
		let mut session = loaded();
		session.inspect(session.graph().nodes[0].clone());
		assert!(session.selection().inspected().is_some());
		session.close_inspector();
		assert!(session.selection().inspected().is_none());
	}
}
