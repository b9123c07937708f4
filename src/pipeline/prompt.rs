//! Prompt template for the tone rewrite.
//!
//! The rephrasing model takes an instruction string, not raw text. This is
//! the only place that string is built, so its exact wording lives here.

/// Build the rephrasing instruction for a tone and a summary.
pub fn rephrase_prompt(tone: &str, summary: &str) -> String {
    format!("Rewrite this in a {tone} tone: {summary}")
}
