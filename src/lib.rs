//! textlens — HTTP text annotation service.
//!
//! One endpoint takes free text and answers with derived annotations:
//! detected language, an English translation, a summary, a tone-adjusted
//! rewrite of the summary, and a rule-based tag bundle. The substantive
//! computation lives in external pre-trained models reached through narrow
//! adapters; this crate owns the orchestration, the tag rules, and the
//! HTTP surface.

pub mod api; // HTTP router, server lifecycle, error shaping
pub mod config;
pub mod pipeline; // model gateway, entity scanner, tag rules, orchestration
