pub mod file_input;
pub mod force_graph;
pub mod node_detail;
pub mod page_selector;
pub mod presentation;
pub mod welcome;
