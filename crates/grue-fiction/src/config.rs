//! Configuration for the interpreter.

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Add a "Did you mean" line after unknown words that look like a typo.
    pub suggestions: bool,
    /// Minimum Jaro-Winkler similarity (0.0-1.0) for a suggestion.
    pub suggestion_threshold: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            suggestions: false,
            suggestion_threshold: 0.85,
        }
    }
}

impl GameConfig {
    /// Enable or disable did-you-mean suggestions.
    pub fn with_suggestions(mut self, enabled: bool) -> Self {
        self.suggestions = enabled;
        self
    }

    /// Set the suggestion similarity threshold (clamped to 0.0-1.0).
    pub fn with_suggestion_threshold(mut self, threshold: f64) -> Self {
        self.suggestion_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert!(!cfg.suggestions);
        assert!((cfg.suggestion_threshold - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_suggestions(true)
            .with_suggestion_threshold(0.9);
        assert!(cfg.suggestions);
        assert!((cfg.suggestion_threshold - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn threshold_clamped() {
        let cfg = GameConfig::default().with_suggestion_threshold(-1.0);
        assert!(cfg.suggestion_threshold.abs() < f64::EPSILON);
        let cfg = GameConfig::default().with_suggestion_threshold(7.0);
        assert!((cfg.suggestion_threshold - 1.0).abs() < f64::EPSILON);
    }
}
