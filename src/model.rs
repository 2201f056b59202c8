//! Document collection records as they appear in a JSONL export.
//!
//! Every non-blank line of an export is one [`DocumentPage`]. Fields the
//! visualizer does not use are kept in `extra` so nothing the exporter wrote
//! is lost while a page is being inspected.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + Deserialize<'de>,
{
	Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An outbound reference from a chunk. The URL string is its identity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawUrlLink")]
pub struct UrlLink {
	/// Target address, used verbatim as the graph node id.
	pub url: String,
	/// Fields not understood by the visualizer.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl UrlLink {
	/// Link with no extra fields.
	pub fn new(url: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			extra: Map::new(),
		}
	}
}

// Exporters write links either as `{"url": ...}` objects or as bare strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawUrlLink {
	Bare(String),
	Object {
		url: String,
		#[serde(flatten)]
		extra: Map<String, Value>,
	},
}

impl From<RawUrlLink> for UrlLink {
	fn from(raw: RawUrlLink) -> Self {
		match raw {
			RawUrlLink::Bare(url) => Self::new(url),
			RawUrlLink::Object { url, extra } => Self { url, extra },
		}
	}
}

/// A section of a page's content, optionally nested under another chunk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
	/// Numeric id, unique within the owning page. `0` marks the page's root.
	/// Required: it is part of the chunk's node id.
	pub id: i64,
	/// Globally unique id.
	#[serde(default, deserialize_with = "null_as_default")]
	pub unique_id: String,
	/// Text of the chunk.
	#[serde(default, deserialize_with = "null_as_default")]
	pub content: String,
	/// Id of the parent chunk on the same page, `None` for root chunks.
	#[serde(default)]
	pub parent_id: Option<i64>,
	/// Globally unique id of the parent chunk.
	#[serde(default)]
	pub parent_unique_id: Option<String>,
	/// Outbound references found in the chunk.
	#[serde(default, deserialize_with = "null_as_default")]
	pub url_links: Vec<UrlLink>,
	/// Fields not understood by the visualizer.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Chunk {
	/// The parent this chunk claims, treating `0` like `null`.
	///
	/// Exports written by older tooling use `parent_id: 0` for top-level
	/// chunks, so a zero parent never makes a chunk an orphan.
	pub fn declared_parent(&self) -> Option<i64> {
		self.parent_id.filter(|&parent| parent != 0)
	}

	/// Whether this chunk hangs directly off its page.
	pub fn is_page_root(&self) -> bool {
		self.id == 0
	}
}

/// A top-level document owning an ordered list of chunks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
	/// Globally unique id. Required: pages are selected and identified by it.
	pub unique_id: String,
	/// Display title.
	#[serde(default, deserialize_with = "null_as_default")]
	pub title: String,
	/// Full page text.
	#[serde(default, deserialize_with = "null_as_default")]
	pub content: String,
	/// Copyright notice.
	#[serde(default, deserialize_with = "null_as_default")]
	pub copyright: String,
	/// Content chunks in document order.
	#[serde(default, deserialize_with = "null_as_default")]
	pub chunks: Vec<Chunk>,
	/// Keywords attached by the exporter.
	#[serde(default, deserialize_with = "null_as_default")]
	pub keywords: Vec<String>,
	/// Short summary of the page.
	#[serde(default, deserialize_with = "null_as_default")]
	pub summary: String,
	/// Fields not understood by the visualizer.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl DocumentPage {
	/// Ids of every chunk currently on the page.
	pub fn chunk_ids(&self) -> HashSet<i64> {
		self.chunks.iter().map(|chunk| chunk.id).collect()
	}

	/// Looks up a chunk by its page-local id.
	pub fn chunk(&self, id: i64) -> Option<&Chunk> {
		self.chunks.iter().find(|chunk| chunk.id == id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn missing_optional_fields_default() {
		let page: DocumentPage = serde_json::from_value(json!({
			"unique_id": "p1",
			"title": "T",
			"chunks": [{ "id": 0, "unique_id": "c0", "content": "x", "parent_id": null }]
		}))
		.unwrap();

		assert_eq!(page.copyright, "");
		assert!(page.keywords.is_empty());
		assert_eq!(page.chunks[0].parent_unique_id, None);
		assert!(page.chunks[0].url_links.is_empty());
	}

	#[test]
	fn url_links_accept_objects_and_bare_strings() {
		let chunk: Chunk = serde_json::from_value(json!({
			"id": 1,
			"url_links": [{ "url": "http://a", "text": "A" }, "http://b"]
		}))
		.unwrap();

		assert_eq!(chunk.url_links[0].url, "http://a");
		assert_eq!(chunk.url_links[0].extra.get("text"), Some(&json!("A")));
		assert_eq!(chunk.url_links[1], UrlLink::new("http://b"));
	}

	#[test]
	fn null_collections_read_as_empty() {
		let page: DocumentPage = serde_json::from_value(json!({
			"unique_id": "p1",
			"title": null,
			"keywords": null,
			"chunks": [{ "id": 3, "url_links": null }]
		}))
		.unwrap();

		assert_eq!(page.title, "");
		assert!(page.keywords.is_empty());
		assert!(page.chunks[0].url_links.is_empty());
	}

	#[test]
	fn unknown_fields_are_preserved() {
		let page: DocumentPage = serde_json::from_value(json!({
			"unique_id": "p1",
			"source": "crawler-7",
			"chunks": []
		}))
		.unwrap();

		assert_eq!(page.extra.get("source"), Some(&json!("crawler-7")));
		assert_eq!(serde_json::to_value(&page).unwrap()["source"], json!("crawler-7"));
	}

	#[test]
	fn zero_parent_is_not_a_declared_parent() {
		let chunk: Chunk = serde_json::from_value(json!({ "id": 4, "parent_id": 0 })).unwrap();
		assert_eq!(chunk.declared_parent(), None);

		let chunk: Chunk = serde_json::from_value(json!({ "id": 4, "parent_id": 2 })).unwrap();
		assert_eq!(chunk.declared_parent(), Some(2));
	}
}
