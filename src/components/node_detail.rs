use leptos::prelude::*;

use crate::graph::{Node, NodeData};
use crate::session::Session;

/// How a detail value is shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailValue {
	/// Inline text.
	Text(String),
	/// Preformatted block, for chunk content.
	Block(String),
	/// External hyperlink.
	Link(String),
}

/// One labelled row of the detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
	/// Row heading.
	pub label: &'static str,
	/// Row body.
	pub value: DetailValue,
}

fn text(label: &'static str, value: impl ToString) -> DetailRow {
	DetailRow {
		label,
		value: DetailValue::Text(value.to_string()),
	}
}

fn or_none(value: Option<impl ToString>) -> String {
	value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Rows describing a node, chosen by the kind of record it carries.
pub fn detail_rows(node: &Node) -> Vec<DetailRow> {
	match &node.data {
		NodeData::Collection(summary) => vec![text("Status", &summary.text)],
		NodeData::Page(page) => {
			let mut rows = vec![
				text("Title", &page.title),
				text("Unique ID", &page.unique_id),
				text("Chunk Count", page.chunks.len()),
				text("Copyright", &page.copyright),
			];
			if !page.summary.is_empty() {
				rows.push(text("Summary", &page.summary));
			}
			if !page.keywords.is_empty() {
				rows.push(text("Keywords", page.keywords.join(", ")));
			}
			rows
		}
		NodeData::Chunk(chunk) => vec![
			text("ID", chunk.id),
			text("Unique ID", &chunk.unique_id),
			text("Parent ID", or_none(chunk.parent_id)),
			text("Parent Unique ID", or_none(chunk.parent_unique_id.as_ref())),
			DetailRow {
				label: "Content",
				value: DetailValue::Block(chunk.content.clone()),
			},
		],
		NodeData::UrlLink(link) => vec![DetailRow {
			label: "URL",
			value: DetailValue::Link(link.url.clone()),
		}],
	}
}

fn render_row(row: DetailRow) -> impl IntoView {
	let body = match row.value {
		DetailValue::Text(value) => view! { <dd>{value}</dd> }.into_any(),
		DetailValue::Block(value) => view! {
			<dd>
				<pre class="chunk-content">{value}</pre>
			</dd>
		}
		.into_any(),
		DetailValue::Link(url) => {
			let href = url.clone();
			view! {
				<dd>
					<a href=href target="_blank" rel="noopener noreferrer">
						{url}
					</a>
				</dd>
			}
			.into_any()
		}
	};
	view! {
		<div class="detail-row">
			<dt>{row.label}</dt>
			{body}
		</div>
	}
}

/// Slide-in panel with the details of the inspected node.
#[component]
pub fn NodeDetailPanel(session: RwSignal<Session>) -> impl IntoView {
	let inspected = move || session.with(|s| s.selection().inspected().cloned());

	move || {
		inspected().map(|node| {
			let rows = detail_rows(&node);
			view! {
				<div class="detail-panel">
					<header>
						<h2>{format!("{} Details", node.name)}</h2>
						<button
							class="close"
							title="Close"
							on:click=move |_| session.update(Session::close_inspector)
						>
							"×"
						</button>
					</header>
					<dl>{rows.into_iter().map(render_row).collect_view()}</dl>
				</div>
			}
		})
	}
}
