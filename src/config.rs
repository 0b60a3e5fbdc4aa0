//! Game-session settings, loadable from TOML.
//!
//! ```toml
//! human_color = "black"
//! search_depth = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::search::minimax::{SearchConfig, MAX_SEARCH_DEPTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    #[serde(default = "default_human_color")]
    pub human_color: Color,
    #[serde(default = "default_search_depth")]
    pub search_depth: u8,
}

fn default_human_color() -> Color {
    Color::White
}

fn default_search_depth() -> u8 {
    SearchConfig::default().depth
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_color: default_human_color(),
            search_depth: default_search_depth(),
        }
    }
}

impl SessionConfig {
    pub fn new(human_color: Color, search_depth: u8) -> Self {
        Self {
            human_color,
            search_depth,
        }
        .sanitized()
    }

    pub fn engine_color(&self) -> Color {
        self.human_color.opposite()
    }

    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        let config: SessionConfig =
            toml::from_str(text).map_err(|e| ChessError::InvalidConfig(e.to_string()))?;
        Ok(config.sanitized())
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ChessResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChessError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Out-of-range depths are clamped rather than rejected.
    fn sanitized(mut self) -> Self {
        let clamped = self.search_depth.clamp(1, MAX_SEARCH_DEPTH);
        if clamped != self.search_depth {
            log::warn!(
                "search_depth={} out of range 1..={MAX_SEARCH_DEPTH}; using {clamped}",
                self.search_depth
            );
            self.search_depth = clamped;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_browser_game() {
        let config = SessionConfig::default();
        assert_eq!(config.human_color, Color::White);
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.engine_color(), Color::Black);
    }

    #[test]
    fn parses_toml_with_missing_fields_defaulted() {
        let config = SessionConfig::from_toml_str("human_color = \"black\"").unwrap();
        assert_eq!(config.human_color, Color::Black);
        assert_eq!(config.search_depth, 2);

        let empty = SessionConfig::from_toml_str("").unwrap();
        assert_eq!(empty, SessionConfig::default());
    }

    #[test]
    fn depth_is_clamped() {
        let deep = SessionConfig::from_toml_str("search_depth = 40").unwrap();
        assert_eq!(deep.search_depth, MAX_SEARCH_DEPTH);
        assert_eq!(SessionConfig::new(Color::White, 0).search_depth, 1);
    }

    #[test]
    fn bad_input_is_an_invalid_config() {
        for text in ["human_color = \"green\"", "search_depth = -1", "colour = \"white\""] {
            assert!(matches!(
                SessionConfig::from_toml_str(text),
                Err(ChessError::InvalidConfig(_))
            ));
        }
        assert!(matches!(
            SessionConfig::from_toml_file("/nonexistent/arcade_chess.toml"),
            Err(ChessError::InvalidConfig(_))
        ));
    }
}
