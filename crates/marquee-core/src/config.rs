use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub trim: TrimLimits,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            animation: AnimationConfig::default(),
            trim: TrimLimits::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Window width in characters for generated scrolling frames
    #[serde(default = "default_display_width")]
    pub display_width: usize,
    /// Advance-ticks required per frame change
    #[serde(default = "default_step")]
    pub step: u32,
    /// Stable text before the scrolling window
    #[serde(default)]
    pub prefix: String,
    /// Stable text after the scrolling window
    #[serde(default)]
    pub suffix: String,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            display_width: default_display_width(),
            step: default_step(),
            prefix: String::new(),
            suffix: String::new(),
        }
    }
}

/// Character budgets enforced by the trim adapter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrimLimits {
    /// Budget for normal display lines
    #[serde(default = "default_short_limit")]
    pub short: usize,
    /// Budget for hosts that support long display lines
    #[serde(default = "default_long_limit")]
    pub long: usize,
}

impl Default for TrimLimits {
    fn default() -> Self {
        Self {
            short: default_short_limit(),
            long: default_long_limit(),
        }
    }
}

fn default_display_width() -> usize {
    28
}

fn default_step() -> u32 {
    1
}

fn default_short_limit() -> usize {
    28
}

fn default_long_limit() -> usize {
    64
}

impl MarqueeConfig {
    /// Load configuration from file or return defaults
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MarqueeConfig::default();
        assert_eq!(config.animation.display_width, 28);
        assert_eq!(config.animation.step, 1);
        assert_eq!(config.animation.prefix, "");
        assert_eq!(config.animation.suffix, "");
        assert_eq!(config.trim.short, 28);
        assert_eq!(config.trim.long, 64);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: MarqueeConfig = toml::from_str(
            r#"
            [animation]
            display_width = 12
            prefix = "> "
            "#,
        )
        .unwrap();
        assert_eq!(config.animation.display_width, 12);
        assert_eq!(config.animation.prefix, "> ");
        assert_eq!(config.animation.step, 1);
        assert_eq!(config.trim.short, 28);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let config = MarqueeConfig::load(Path::new("/nonexistent/marquee.toml")).unwrap();
        assert_eq!(config.animation.display_width, 28);
    }
}
