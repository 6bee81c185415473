// Newsbrief: topic extraction and news summarization backend
//
// This is the library root. Each module corresponds to a major subsystem:
// query → topic (extraction pipelines), articles → summary (prompt assembly
// and the generation call), plus the HTTP surface and the article store.

pub mod config;
pub mod extract;
pub mod genai;
pub mod store;
pub mod summarize;
pub mod web;
