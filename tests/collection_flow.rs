use doc_collection_graph::{LinkLabel, LoadError, NodeData, NodeKind, Session, parse_collection};
use pretty_assertions::assert_eq;

const EXPORT: &str = r#"{"unique_id":"p1","title":"Getting started","summary":"Intro","chunks":[{"id":0,"unique_id":"p1-0","content":"root","parent_id":null,"url_links":[{"url":"https://docs.example/a"}]},{"id":1,"unique_id":"p1-1","content":"child","parent_id":0,"url_links":["https://docs.example/shared"]},{"id":2,"unique_id":"p1-2","content":"lost","parent_id":17,"url_links":[]}]}

{"unique_id":"p2","title":"Reference","chunks":[{"id":0,"unique_id":"p2-0","content":"root","parent_id":null,"url_links":["https://docs.example/shared"]}]}
"#;

#[test]
fn end_to_end_example() {
	let mut session = Session::default();
	session.load_text(
		r#"{"unique_id":"p1","title":"T","chunks":[{"id":0,"unique_id":"c0","content":"x","parent_id":null,"url_links":[{"url":"http://a"}]}]}"#,
	);
	session.toggle_all();

	let graph = session.graph();
	assert_eq!(graph.nodes.len(), 4);
	assert_eq!(graph.links.len(), 6);
	for kind in NodeKind::ALL {
		assert_eq!(graph.count(kind), 1, "{kind}");
	}
}

#[test]
fn load_select_inspect() {
	let mut session = Session::default();
	assert!(session.begin_load());
	session.finish_load(parse_collection(EXPORT));
	assert_eq!(session.pages().len(), 2);
	assert!(session.selection().is_empty());

	// orphan chunk 2 is gone before anything is projected
	assert_eq!(session.pages()[0].chunks.len(), 2);

	session.toggle_all();
	let graph = session.graph();
	assert_eq!(graph.count(NodeKind::Page), 2);
	assert_eq!(graph.count(NodeKind::Chunk), 3);
	assert_eq!(graph.count(NodeKind::UrlLink), 2);
	assert!(graph.node("chunk:p1:2").is_none());

	let shared_refs = graph
		.links
		.iter()
		.filter(|l| l.label == LinkLabel::RefersTo && l.target == "https://docs.example/shared")
		.count();
	assert_eq!(shared_refs, 2);

	let page = graph.node("page:p2").cloned().unwrap();
	session.inspect(page);
	session.toggle_page("p2");
	let inspected = session.selection().inspected().unwrap();
	assert!(matches!(&inspected.data, NodeData::Page(p) if p.title == "Reference"));
	assert!(session.graph().node("page:p2").is_none());
}

#[test]
fn one_bad_line_loads_nothing() {
	let text = format!("{EXPORT}{{\"unique_id\": \n");
	let mut session = Session::default();
	session.load_text(&text);

	assert!(session.pages().is_empty());
	assert!(matches!(session.error(), Some(LoadError::LineParse { line: 3, .. })));
}

#[test]
fn reload_resets_selection() {
	let mut session = Session::default();
	session.load_text(EXPORT);
	session.toggle_page("p1");
	assert_eq!(session.selection().len(), 1);

	session.load_text(EXPORT);
	assert!(session.selection().is_empty());
	assert_eq!(session.graph().nodes.len(), 1);
}
