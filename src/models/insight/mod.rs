// Insight module
// Structured result of the AI critique of a tracked week

use serde::{Deserialize, Serialize};

/// AI-generated critique of one tracked week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    /// Accountability score, 0..=100.
    pub score: u8,
    /// Short "tough love" critique of the user's time management.
    pub critique: String,
    /// Specific, actionable recommendations.
    pub recommendations: Vec<String>,
}

impl AiInsight {
    pub fn validate(&self) -> Result<(), String> {
        if self.score > 100 {
            return Err(format!(
                "Score must be between 0 and 100, got {}",
                self.score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_insight() {
        let json = r#"{
            "score": 72,
            "critique": "Too many untracked mornings.",
            "recommendations": ["Track before noon", "Sleep earlier", "Batch meetings"]
        }"#;
        let insight: AiInsight = serde_json::from_str(json).unwrap();
        assert_eq!(insight.score, 72);
        assert_eq!(insight.recommendations.len(), 3);
        assert!(insight.validate().is_ok());
    }

    #[test]
    fn test_validate_score_out_of_range() {
        let insight = AiInsight {
            score: 101,
            critique: String::new(),
            recommendations: vec![],
        };
        assert!(insight.validate().is_err());
    }
}
