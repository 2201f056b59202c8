use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::node_detail::NodeDetailPanel;
use crate::components::page_selector::PageSelector;
use crate::components::presentation::{resolve_click, to_graph_data};
use crate::components::welcome::WelcomeScreen;
use crate::graph::project;
use crate::session::Session;

/// Canvas area with the page selector on the left and the detail panel on the right.
#[component]
fn CollectionView(session: RwSignal<Session>) -> impl IntoView {
	let selected = Memo::new(move |_| session.with(Session::selected_pages));
	let graph = Memo::new(move |_| selected.with(|pages| project(pages)));
	let graph_data = Signal::derive(move || graph.with(to_graph_data));
	let nothing_selected = Memo::new(move |_| selected.with(Vec::is_empty));

	let on_node_click = Callback::new(move |id: String| {
		if let Some(node) = graph.with(|g| resolve_click(g, &id)) {
			session.update(|s| s.inspect(node));
		}
	});

	view! {
		<main class="collection-view">
			<PageSelector session />
			<div class="graph-area">
				<header class="graph-overlay">
					<h1>"Document Collection Visualizer"</h1>
					<p class="subtitle">{move || session.with(Session::status_line)}</p>
				</header>
				<ForceGraphCanvas data=graph_data on_node_click />
				<Show when=move || nothing_selected.get()>
					<div class="empty-graph">
						<h2>"No Pages Selected"</h2>
						<p>"Select one or more pages from the panel on the left to visualize them."</p>
					</div>
				</Show>
			</div>
			<NodeDetailPanel session />
		</main>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let session = RwSignal::new(Session::default());
	let has_pages = Memo::new(move |_| session.with(|s| !s.pages().is_empty()));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{move || {
				if has_pages.get() {
					view! { <CollectionView session /> }.into_any()
				} else {
					view! { <WelcomeScreen session /> }.into_any()
				}
			}}
		</ErrorBoundary>
	}
}
