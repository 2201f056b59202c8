//! Leptos client-side app for exploring a JSONL document collection as a graph.
//!
//! The pure core is [`loader`] (text to pages), [`graph`] (pages to nodes and
//! links) and [`selection`]/[`session`] (what is shown and inspected); the
//! `components` module binds it to the force-directed canvas.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
mod pages;
pub mod selection;
pub mod session;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use crate::error::LoadError;
pub use crate::graph::{CollectionGraph, Link, LinkLabel, Node, NodeData, NodeKind, project};
pub use crate::loader::parse_collection;
pub use crate::model::{Chunk, DocumentPage, UrlLink};
pub use crate::session::Session;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the visualizer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Document Collection Visualizer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
