//! Acceptance rules for generated articles.

use crate::ValidationConfig;
use herald_error::ValidationError;

/// Checks a generated body against the configured acceptance rules.
///
/// Every rule is evaluated; a rejection lists all violations at once.
///
/// # Examples
///
/// ```
/// use herald_pipeline::{ArtifactValidator, HeraldConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let validator = ArtifactValidator::new(HeraldConfig::bundled()?.validation);
/// let violations = validator.violations("짧은 글");
/// assert_eq!(violations.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArtifactValidator {
    config: ValidationConfig,
}

impl ArtifactValidator {
    /// Validator applying `config`.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Every rule the body breaks, in rule order.
    pub fn violations(&self, body: &str) -> Vec<String> {
        let mut violations = Vec::new();

        let length = body.chars().count();
        if length < self.config.min_length {
            violations.push(format!(
                "Content too short ({} chars, minimum {})",
                length, self.config.min_length
            ));
        }

        if !self
            .config
            .disclaimer_markers
            .iter()
            .any(|marker| body.contains(marker.as_str()))
        {
            violations.push("Missing AI disclaimer".to_string());
        }

        if !body.contains(self.config.heading_marker.as_str()) {
            violations.push("No markdown headings found".to_string());
        }

        violations
    }

    /// Accept or reject `body`.
    pub fn validate(&self, body: &str) -> Result<(), ValidationError> {
        let violations = self.violations(body);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ArtifactValidator {
        ArtifactValidator::new(ValidationConfig {
            min_length: 800,
            disclaimer_markers: vec!["AI 분석 도구".to_string(), "AI가".to_string()],
            heading_marker: "##".to_string(),
        })
    }

    fn body_of(chars: usize, disclaimer: &str) -> String {
        let head = format!("## 분석\n{}\n", disclaimer);
        let pad = chars.saturating_sub(head.chars().count());
        format!("{}{}", head, "가".repeat(pad))
    }

    #[test]
    fn short_body_is_rejected_with_its_length() {
        let body = body_of(500, "AI 분석 도구의 도움을 받았습니다.");
        let err = validator().validate(&body).unwrap_err();
        assert_eq!(
            err.violations(),
            ["Content too short (500 chars, minimum 800)".to_string()]
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let body = body_of(801, "AI가 작성을 도왔습니다.");
        assert!(body.len() > 2000);
        assert!(validator().validate(&body).is_ok());
    }

    #[test]
    fn missing_disclaimer_is_rejected() {
        let body = body_of(900, "사람이 작성했습니다.");
        let err = validator().validate(&body).unwrap_err();
        assert_eq!(err.violations(), ["Missing AI disclaimer".to_string()]);
    }

    #[test]
    fn all_violations_are_reported_together() {
        let violations = validator().violations("plain text");
        assert_eq!(
            violations,
            vec![
                "Content too short (10 chars, minimum 800)".to_string(),
                "Missing AI disclaimer".to_string(),
                "No markdown headings found".to_string(),
            ]
        );
    }
}
