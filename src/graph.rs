//! Projection of selected pages into a node/link graph.
//!
//! Node ids follow a fixed scheme so every id is unique across the graph:
//!
//! | node       | id                              |
//! |------------|---------------------------------|
//! | collection | `collection`                    |
//! | page       | `page:<page unique_id>`         |
//! | chunk      | `chunk:<page unique_id>:<id>`   |
//! | url link   | the URL itself                  |
//!
//! Each id is emitted once. A URL spelled like a collection, page or chunk id
//! gets no node of its own; its links attach to the node holding that id.
//!
//! Every relationship is emitted in both directions with inverse labels.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::model::{Chunk, DocumentPage, UrlLink};

/// Id of the single synthetic node standing for the whole collection.
pub const COLLECTION_NODE_ID: &str = "collection";

const COLLECTION_SIZE: f64 = 25.0;
const PAGE_SIZE: f64 = 20.0;
const CHUNK_SIZE: f64 = 5.0;
const URL_LINK_SIZE: f64 = 1.0;

/// Node id for a page.
pub fn page_node_id(page_uid: &str) -> String {
	format!("page:{page_uid}")
}

/// Node id for a chunk of a page.
pub fn chunk_node_id(page_uid: &str, chunk_id: i64) -> String {
	format!("chunk:{page_uid}:{chunk_id}")
}

/// What a node stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
	/// The loaded collection as a whole.
	Collection,
	/// A document page.
	Page,
	/// A chunk of a page.
	Chunk,
	/// An outbound URL.
	UrlLink,
}

impl NodeKind {
	/// All kinds, in drawing-legend order.
	pub const ALL: [NodeKind; 4] = [Self::Collection, Self::Page, Self::Chunk, Self::UrlLink];

	/// Wire name of the kind.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Collection => "collection",
			Self::Page => "page",
			Self::Chunk => "chunk",
			Self::UrlLink => "url_link",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Synthetic record carried by the collection node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CollectionSummary {
	/// Number of pages in the projection.
	pub page_count: usize,
	/// Human readable status line.
	pub text: String,
}

impl CollectionSummary {
	fn new(page_count: usize) -> Self {
		Self {
			page_count,
			text: format!("{page_count} document(s) referenced in this collection."),
		}
	}
}

/// The record behind a node, tagged by node kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum NodeData {
	/// See [`NodeKind::Collection`].
	Collection(CollectionSummary),
	/// See [`NodeKind::Page`].
	Page(Arc<DocumentPage>),
	/// See [`NodeKind::Chunk`].
	Chunk(Chunk),
	/// See [`NodeKind::UrlLink`].
	UrlLink(UrlLink),
}

impl NodeData {
	/// Kind implied by the variant.
	pub fn kind(&self) -> NodeKind {
		match self {
			Self::Collection(_) => NodeKind::Collection,
			Self::Page(_) => NodeKind::Page,
			Self::Chunk(_) => NodeKind::Chunk,
			Self::UrlLink(_) => NodeKind::UrlLink,
		}
	}
}

/// A vertex of the projected graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
	/// Graph-unique id, see the module docs for the scheme.
	pub id: String,
	/// Display label.
	pub name: String,
	/// Underlying record.
	#[serde(flatten)]
	pub data: NodeData,
	/// Relative size; renderers turn this into a radius.
	pub size_hint: f64,
}

impl Node {
	/// Kind of the node.
	pub fn kind(&self) -> NodeKind {
		self.data.kind()
	}
}

/// Relationship carried by a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LinkLabel {
	/// collection → page, page → root chunk
	Contains,
	/// page → collection
	IsPartOf,
	/// root chunk → page
	BelongsTo,
	/// chunk → parent chunk
	IsChildOf,
	/// parent chunk → chunk
	IsParentOf,
	/// chunk → url
	RefersTo,
	/// url → chunk
	IsReferencedBy,
}

impl LinkLabel {
	/// Label as drawn on the edge.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Contains => "CONTAINS",
			Self::IsPartOf => "IS_PART_OF",
			Self::BelongsTo => "BELONGS_TO",
			Self::IsChildOf => "IS_CHILD_OF",
			Self::IsParentOf => "IS_PARENT_OF",
			Self::RefersTo => "REFERS_TO",
			Self::IsReferencedBy => "IS_REFERENCED_BY",
		}
	}
}

impl fmt::Display for LinkLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A directed edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Link {
	/// Id of the tail node.
	pub source: String,
	/// Id of the head node.
	pub target: String,
	/// Relationship name.
	pub label: LinkLabel,
}

/// Result of one projection pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CollectionGraph {
	/// Nodes in emission order; the collection node is always first.
	pub nodes: Vec<Node>,
	/// Links in emission order.
	pub links: Vec<Link>,
}

impl CollectionGraph {
	/// Finds a node by id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|node| node.id == id)
	}

	/// Number of nodes of the given kind.
	pub fn count(&self, kind: NodeKind) -> usize {
		self.nodes.iter().filter(|node| node.kind() == kind).count()
	}

	/// Links leaving the given node.
	pub fn links_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
		self.links.iter().filter(move |link| link.source == id)
	}
}

struct GraphBuilder {
	graph: CollectionGraph,
	/// Collection, page and chunk ids of the whole projection.
	reserved: HashSet<String>,
	emitted: HashSet<String>,
}

impl GraphBuilder {
	fn new(pages: &[Arc<DocumentPage>]) -> Self {
		let mut reserved = HashSet::from([COLLECTION_NODE_ID.to_string()]);
		for page in pages {
			reserved.insert(page_node_id(&page.unique_id));
			reserved.extend(
				page.chunks
					.iter()
					.map(|chunk| chunk_node_id(&page.unique_id, chunk.id)),
			);
		}
		let mut builder = Self {
			graph: CollectionGraph::default(),
			reserved,
			emitted: HashSet::new(),
		};
		builder.node(
			COLLECTION_NODE_ID.to_string(),
			"Collection".to_string(),
			NodeData::Collection(CollectionSummary::new(pages.len())),
			COLLECTION_SIZE,
		);
		builder
	}

	fn node(&mut self, id: String, name: String, data: NodeData, size_hint: f64) {
		if !self.emitted.insert(id.clone()) {
			return;
		}
		self.graph.nodes.push(Node {
			id,
			name,
			data,
			size_hint,
		});
	}

	fn link_pair(&mut self, from: &str, to: &str, forward: LinkLabel, backward: LinkLabel) {
		self.graph.links.push(Link {
			source: from.to_string(),
			target: to.to_string(),
			label: forward,
		});
		self.graph.links.push(Link {
			source: to.to_string(),
			target: from.to_string(),
			label: backward,
		});
	}

	fn page(&mut self, page: &Arc<DocumentPage>) {
		let page_id = page_node_id(&page.unique_id);
		self.node(
			page_id.clone(),
			page.title.clone(),
			NodeData::Page(Arc::clone(page)),
			PAGE_SIZE,
		);
		self.link_pair(
			COLLECTION_NODE_ID,
			&page_id,
			LinkLabel::Contains,
			LinkLabel::IsPartOf,
		);

		let ids = page.chunk_ids();
		for chunk in &page.chunks {
			self.chunk(page, &page_id, chunk, &ids);
		}
	}

	fn chunk(&mut self, page: &DocumentPage, page_id: &str, chunk: &Chunk, ids: &HashSet<i64>) {
		let chunk_id = chunk_node_id(&page.unique_id, chunk.id);
		self.node(
			chunk_id.clone(),
			format!("Chunk {}", chunk.id),
			NodeData::Chunk(chunk.clone()),
			CHUNK_SIZE,
		);

		if chunk.is_page_root() {
			self.link_pair(page_id, &chunk_id, LinkLabel::Contains, LinkLabel::BelongsTo);
		}

		// Any present parent links, including id 0; pruning treats 0 differently.
		if let Some(parent) = chunk.parent_id.filter(|parent| ids.contains(parent)) {
			let parent_id = chunk_node_id(&page.unique_id, parent);
			self.link_pair(
				&chunk_id,
				&parent_id,
				LinkLabel::IsChildOf,
				LinkLabel::IsParentOf,
			);
		}

		for link in &chunk.url_links {
			if !self.reserved.contains(&link.url) {
				self.node(
					link.url.clone(),
					"Link".to_string(),
					NodeData::UrlLink(link.clone()),
					URL_LINK_SIZE,
				);
			}
			self.link_pair(
				&chunk_id,
				&link.url,
				LinkLabel::RefersTo,
				LinkLabel::IsReferencedBy,
			);
		}
	}
}

/// Builds the graph for a set of pages. Deterministic and infallible.
pub fn project(pages: &[Arc<DocumentPage>]) -> CollectionGraph {
	let mut builder = GraphBuilder::new(pages);
	for page in pages {
		builder.page(page);
	}
	builder.graph
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	fn page(json: &str) -> Arc<DocumentPage> {
		Arc::new(serde_json::from_str(json).unwrap())
	}

	fn edges(graph: &CollectionGraph) -> Vec<(&str, &str, &str)> {
		graph
			.links
			.iter()
			.map(|l| (l.source.as_str(), l.target.as_str(), l.label.as_str()))
			.collect()
	}

	#[test]
	fn empty_selection_has_only_the_collection_node() {
		let graph = project(&[]);
		assert_eq!(graph.nodes.len(), 1);
		assert_eq!(graph.nodes[0].id, COLLECTION_NODE_ID);
		assert!(graph.links.is_empty());
		match &graph.nodes[0].data {
			NodeData::Collection(summary) => {
				assert_eq!(summary.text, "0 document(s) referenced in this collection.")
			}
			other => panic!("unexpected collection data {other:?}"),
		}
	}

	#[test]
	fn single_page_projection() {
		let graph = project(&[page(
			r#"{"unique_id":"p1","title":"T","chunks":[{"id":0,"unique_id":"c0","content":"x","parent_id":null,"url_links":[{"url":"http://a"}]}]}"#,
		)]);

		let ids: Vec<_> = graph.nodes.iter().map(|n| (n.id.as_str(), n.kind())).collect();
		assert_eq!(
			ids,
			[
				("collection", NodeKind::Collection),
				("page:p1", NodeKind::Page),
				("chunk:p1:0", NodeKind::Chunk),
				("http://a", NodeKind::UrlLink),
			]
		);
		assert_eq!(
			edges(&graph),
			[
				("collection", "page:p1", "CONTAINS"),
				("page:p1", "collection", "IS_PART_OF"),
				("page:p1", "chunk:p1:0", "CONTAINS"),
				("chunk:p1:0", "page:p1", "BELONGS_TO"),
				("chunk:p1:0", "http://a", "REFERS_TO"),
				("http://a", "chunk:p1:0", "IS_REFERENCED_BY"),
			]
		);
		assert_eq!(graph.node("page:p1").unwrap().name, "T");
		assert_eq!(graph.node("chunk:p1:0").unwrap().name, "Chunk 0");
		assert_eq!(graph.node("http://a").unwrap().name, "Link");
	}

	#[test]
	fn shared_url_has_one_node_and_a_link_pair_per_reference() {
		let graph = project(&[
			page(
				r#"{"unique_id":"a","chunks":[{"id":0,"url_links":["http://x"]},{"id":1,"parent_id":0,"url_links":["http://x"]}]}"#,
			),
			page(r#"{"unique_id":"b","chunks":[{"id":0,"url_links":[{"url":"http://x"}]}]}"#),
		]);

		assert_eq!(graph.count(NodeKind::UrlLink), 1);
		let refs = graph
			.links
			.iter()
			.filter(|l| l.label == LinkLabel::RefersTo && l.target == "http://x")
			.count();
		let back = graph.links_from("http://x").count();
		assert_eq!((refs, back), (3, 3));
	}

	#[test]
	fn root_by_id_zero_links_to_page_and_parent() {
		let graph = project(&[page(
			r#"{"unique_id":"p","chunks":[{"id":0,"parent_id":4},{"id":4,"parent_id":null}]}"#,
		)]);

		let from_root: Vec<_> = graph
			.links_from("chunk:p:0")
			.map(|l| (l.target.as_str(), l.label))
			.collect();
		assert_eq!(
			from_root,
			[("page:p", LinkLabel::BelongsTo), ("chunk:p:4", LinkLabel::IsChildOf)]
		);
		// chunk 4 has a null parent but a nonzero id: no page link
		assert_eq!(graph.links_from("chunk:p:4").count(), 1);
	}

	#[test]
	fn missing_parent_yields_no_parent_link() {
		let graph = project(&[page(r#"{"unique_id":"p","chunks":[{"id":2,"parent_id":9}]}"#)]);
		assert_eq!(graph.links_from("chunk:p:2").count(), 0);
		assert_eq!(graph.count(NodeKind::Chunk), 1);
	}

	#[test]
	fn chunk_ids_are_scoped_by_page() {
		let graph = project(&[
			page(r#"{"unique_id":"a","chunks":[{"id":0}]}"#),
			page(r#"{"unique_id":"b","chunks":[{"id":0}]}"#),
		]);
		assert!(graph.node("chunk:a:0").is_some());
		assert!(graph.node("chunk:b:0").is_some());
		assert_eq!(graph.count(NodeKind::Chunk), 2);
	}

	#[test]
	fn url_spelled_like_a_node_id_reuses_that_node() {
		let graph = project(&[page(
			r#"{"unique_id":"p1","chunks":[{"id":0,"url_links":["page:p1","collection","chunk:p1:0"]}]}"#,
		)]);

		let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, ["collection", "page:p1", "chunk:p1:0"]);
		assert_eq!(graph.count(NodeKind::UrlLink), 0);
		let refers: Vec<_> = graph
			.links
			.iter()
			.filter(|l| l.label == LinkLabel::RefersTo)
			.map(|l| l.target.as_str())
			.collect();
		assert_eq!(refers, ["page:p1", "collection", "chunk:p1:0"]);
	}

	#[test]
	fn url_naming_a_later_page_does_not_displace_it() {
		let graph = project(&[
			page(r#"{"unique_id":"a","chunks":[{"id":0,"url_links":["page:b"]}]}"#),
			page(r#"{"unique_id":"b"}"#),
		]);
		assert_eq!(graph.node("page:b").unwrap().kind(), NodeKind::Page);
		assert_eq!(graph.count(NodeKind::UrlLink), 0);
	}

	#[test]
	fn repeated_chunk_id_keeps_one_node() {
		let graph = project(&[page(r#"{"unique_id":"p","chunks":[{"id":3},{"id":3}]}"#)]);
		assert_eq!(graph.count(NodeKind::Chunk), 1);
	}

	#[test]
	fn node_serializes_with_type_tag() {
		let graph = project(&[]);
		let value = serde_json::to_value(&graph.nodes[0]).unwrap();
		assert_eq!(value["type"], "collection");
		assert_eq!(value["data"]["page_count"], 0);
	}

	fn arb_pages() -> impl Strategy<Value = Vec<Arc<DocumentPage>>> {
		let url = prop::sample::select(vec![
			"http://a",
			"http://b",
			"http://c",
			"collection",
			"page:p1",
			"chunk:p0:0",
		]);
		let chunk = (0..6i64, prop::option::of(0..6i64), prop::collection::vec(url, 0..3));
		prop::collection::vec(prop::collection::vec(chunk, 0..5), 0..4).prop_map(|pages| {
			pages
				.into_iter()
				.enumerate()
				.map(|(i, chunks)| {
					let chunks: Vec<_> = chunks
						.into_iter()
						.map(|(id, parent_id, urls)| {
							serde_json::json!({ "id": id, "parent_id": parent_id, "url_links": urls })
						})
						.collect();
					let value = serde_json::json!({ "unique_id": format!("p{i}"), "chunks": chunks });
					Arc::new(serde_json::from_value(value).unwrap())
				})
				.collect()
		})
	}

	fn structural_ids(pages: &[Arc<DocumentPage>]) -> HashSet<String> {
		let mut ids = HashSet::from([COLLECTION_NODE_ID.to_string()]);
		for page in pages {
			ids.insert(page_node_id(&page.unique_id));
			ids.extend(page.chunks.iter().map(|c| chunk_node_id(&page.unique_id, c.id)));
		}
		ids
	}

	proptest! {
		#[test]
		fn node_ids_are_unique(pages in arb_pages()) {
			let graph = project(&pages);
			let ids: HashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
			prop_assert_eq!(ids.len(), graph.nodes.len());
		}

		#[test]
		fn every_link_end_is_a_node(pages in arb_pages()) {
			let graph = project(&pages);
			for link in &graph.links {
				prop_assert!(graph.node(&link.source).is_some());
				prop_assert!(graph.node(&link.target).is_some());
			}
		}

		#[test]
		fn exactly_one_collection_node(pages in arb_pages()) {
			let graph = project(&pages);
			prop_assert_eq!(graph.count(NodeKind::Collection), 1);
			prop_assert_eq!(graph.count(NodeKind::Page), pages.len());
		}

		#[test]
		fn url_nodes_are_distinct_and_links_scale_with_references(pages in arb_pages()) {
			let graph = project(&pages);
			let structural = structural_ids(&pages);
			let distinct: HashSet<_> = pages
				.iter()
				.flat_map(|p| p.chunks.iter().flat_map(|c| c.url_links.iter().map(|l| l.url.clone())))
				.filter(|url| !structural.contains(url))
				.collect();
			let references: usize = pages
				.iter()
				.flat_map(|p| p.chunks.iter().map(|c| c.url_links.len()))
				.sum();
			prop_assert_eq!(graph.count(NodeKind::UrlLink), distinct.len());
			let refers = graph.links.iter().filter(|l| l.label == LinkLabel::RefersTo).count();
			prop_assert_eq!(refers, references);
		}

		#[test]
		fn projection_is_deterministic(pages in arb_pages()) {
			prop_assert_eq!(project(&pages), project(&pages));
		}

		#[test]
		fn every_link_has_a_matching_inverse(pages in arb_pages()) {
			let graph = project(&pages);
			prop_assert_eq!(graph.links.len() % 2, 0);
			for pair in graph.links.chunks(2) {
				prop_assert_eq!(&pair[0].source, &pair[1].target);
				prop_assert_eq!(&pair[0].target, &pair[1].source);
			}
		}
	}
}
