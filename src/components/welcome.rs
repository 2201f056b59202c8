use leptos::prelude::*;

use super::file_input::FileInput;
use crate::session::Session;

/// Landing screen shown until a collection has been loaded.
#[component]
pub fn WelcomeScreen(session: RwSignal<Session>) -> impl IntoView {
	let error = move || session.with(|s| s.error().map(ToString::to_string));

	view! {
		<div class="welcome">
			<div class="welcome-card">
				<h1>"Document Collection Visualizer"</h1>
				<p>
					"Upload a " <code>".jsonl"</code>
					" file to get started. Each line in the file should be a valid JSON object representing a single document page."
				</p>
				<FileInput session label="Select JSONL File" />
				{move || {
					error()
						.map(|message| {
							view! {
								<div class="load-error">
									<p>
										<strong>"Error: "</strong>
										{message}
									</p>
								</div>
							}
						})
				}}
			</div>
		</div>
	}
}
