// src/ui/projection.rs
//! Transcript -> what to draw. No terminal types in here, so the rules
//! about when a sources block shows up can be tested on their own.

use crate::session::{Message, Role};

/// Values some backends send instead of a JSON null.
const NULL_PLACEHOLDERS: [&str; 4] = ["none", "null", "nil", "undefined"];

#[derive(Debug, Clone, PartialEq)]
pub struct MessageView<'a> {
    /// Position in the transcript
    pub index: usize,
    pub role: Role,
    pub content: &'a str,
    pub details: Option<SourcesBlock<'a>>,
}

/// The collapsible "Sources & Details" block under an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcesBlock<'a> {
    pub sources: &'a str,
    pub caption: Option<String>,
}

pub fn project(messages: &[Message]) -> Vec<MessageView<'_>> {
    messages
        .iter()
        .enumerate()
        .map(|(index, message)| MessageView {
            index,
            role: message.role,
            content: &message.content,
            details: sources_block(message),
        })
        .collect()
}

/// Transcript positions of the messages that get a sources block.
pub fn sources_indices(messages: &[Message]) -> Vec<usize> {
    messages
        .iter()
        .enumerate()
        .filter(|(_, m)| has_sources(m.sources.as_deref()))
        .map(|(i, _)| i)
        .collect()
}

pub fn has_sources(sources: Option<&str>) -> bool {
    is_present(sources)
}

/// Absent, blank and stringified nulls all count as missing.
fn is_present(text: Option<&str>) -> bool {
    match text.map(str::trim) {
        None | Some("") => false,
        Some(text) => !NULL_PLACEHOLDERS.iter().any(|p| text.eq_ignore_ascii_case(p)),
    }
}

fn sources_block(message: &Message) -> Option<SourcesBlock<'_>> {
    let sources = message.sources.as_deref().filter(|s| is_present(Some(*s)))?;
    Some(SourcesBlock {
        sources,
        caption: caption(message.score, message.confidence.as_deref()),
    })
}

fn caption(score: Option<f64>, confidence: Option<&str>) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(score) = score {
        parts.push(format!("Relevance Score: {score}/100"));
    }
    if let Some(confidence) = confidence.filter(|c| is_present(Some(*c))) {
        parts.push(format!("Confidence: {confidence}"));
    }
    (!parts.is_empty()).then(|| parts.join(" | "))
}
