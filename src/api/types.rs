use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How hard the backend should search before answering. Opaque to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReasoningDepth(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("reasoning depth {0} is outside {min}..={max}", min = ReasoningDepth::MIN, max = ReasoningDepth::MAX)]
pub struct DepthOutOfRange(pub u8);

impl ReasoningDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    pub fn new(value: u8) -> Result<Self, DepthOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DepthOutOfRange(value))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX))
    }

    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for ReasoningDepth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Body of `POST /query`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a str,
    pub max_iterations: ReasoningDepth,
    pub session_id: &'a str,
}

fn default_answer() -> String {
    "No answer provided.".to_string()
}

/// What the chat shows for one assistant turn, whether the API answered or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default = "default_answer")]
    pub answer: String,
    #[serde(default)]
    pub sources: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub confidence: Option<String>,
}

impl QueryResult {
    /// A locally produced answer with no citations.
    pub fn notice(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            sources: None,
            score: None,
            confidence: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiHealth {
    Connected,
    Unstable,
    Unreachable,
}

impl ApiHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ApiHealth::Connected => "🟢 API Connected",
            ApiHealth::Unstable => "🟠 API Unstable",
            ApiHealth::Unreachable => "🔴 API Unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_bounds() {
        assert!(ReasoningDepth::new(0).is_err());
        assert!(ReasoningDepth::new(6).is_err());
        assert_eq!(ReasoningDepth::new(1).unwrap().get(), 1);
        assert_eq!(ReasoningDepth::new(5).unwrap().get(), 5);
        assert_eq!(ReasoningDepth::default().get(), 3);
    }

    #[test]
    fn test_depth_steps_saturate() {
        let max = ReasoningDepth::new(5).unwrap();
        assert_eq!(max.increment(), max);
        let min = ReasoningDepth::new(1).unwrap();
        assert_eq!(min.decrement(), min);
        assert_eq!(min.increment().get(), 2);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = QueryRequest {
            question: "What projects?",
            max_iterations: ReasoningDepth::new(4).unwrap(),
            session_id: "abc",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"question": "What projects?", "max_iterations": 4, "session_id": "abc"})
        );
    }

    #[test]
    fn test_missing_answer_defaults() {
        let result: QueryResult = serde_json::from_str(r#"{"sources": "cv.pdf"}"#).unwrap();
        assert_eq!(result.answer, "No answer provided.");
        assert_eq!(result.sources.as_deref(), Some("cv.pdf"));
        assert_eq!(result.score, None);
    }
}
