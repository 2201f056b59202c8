//! Turns the text of a JSONL export into validated pages.

use log::{debug, info};

use crate::error::LoadError;
use crate::model::DocumentPage;

/// Parses a whole export. Fails on the first bad line; no partial collection is returned.
///
/// Line numbers in errors count records, so blank lines are not included.
pub fn parse_collection(text: &str) -> Result<Vec<DocumentPage>, LoadError> {
	if text.trim().is_empty() {
		return Err(LoadError::EmptyInput);
	}

	let mut pages = text
		.lines()
		.filter(|line| !line.trim().is_empty())
		.enumerate()
		.map(|(idx, line)| parse_line(idx + 1, line))
		.collect::<Result<Vec<_>, _>>()?;

	let mut pruned = 0;
	for page in &mut pages {
		let dropped = prune_orphans(page);
		if dropped > 0 {
			debug!("page {}: dropped {} orphan chunk(s)", page.unique_id, dropped);
		}
		pruned += dropped;
	}

	info!(
		"parsed {} page(s), {} chunk(s), {} orphan(s) pruned",
		pages.len(),
		pages.iter().map(|p| p.chunks.len()).sum::<usize>(),
		pruned
	);
	Ok(pages)
}

fn parse_line(line: usize, text: &str) -> Result<DocumentPage, LoadError> {
	serde_json::from_str(text).map_err(|err| LoadError::LineParse {
		line,
		message: err.to_string(),
	})
}

/// Drops chunks whose declared parent is not on the page and returns how many went.
///
/// The id set is taken once from the chunks as loaded, so a chunk whose parent
/// is dropped in the same pass is kept.
pub fn prune_orphans(page: &mut DocumentPage) -> usize {
	let ids = page.chunk_ids();
	let before = page.chunks.len();
	page.chunks
		.retain(|chunk| chunk.declared_parent().is_none_or(|parent| ids.contains(&parent)));
	before - page.chunks.len()
}
