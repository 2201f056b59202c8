//! Browser entry point: logging, then mount the app.

use doc_collection_graph::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App)
}
