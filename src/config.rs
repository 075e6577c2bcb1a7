use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content;
use crate::generator::default_base_date;
use crate::renderer::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "mockgen.yaml";

/// Keeps post ids within u32 and hour offsets within chrono's range
pub const MAX_POSTS_PER_CATEGORY: usize = 10_000;

/// Generation settings from mockgen.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_base_date")]
    pub base_date: DateTime<Utc>,
    #[serde(default = "default_posts_per_category")]
    pub posts_per_category: usize,
}

/// Output settings from mockgen.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default)]
    pub format: OutputFormat,
}

/// Complete mockgen.yaml structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MockgenConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_date: default_base_date(),
            posts_per_category: default_posts_per_category(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: OutputFormat::default(),
        }
    }
}

impl GenerationConfig {
    /// Reject values that would overflow while generating `category_count` categories
    pub fn validate(&self, category_count: usize) -> Result<()> {
        if self.posts_per_category > MAX_POSTS_PER_CATEGORY {
            anyhow::bail!(
                "generation.posts_per_category must be at most {}, got {}",
                MAX_POSTS_PER_CATEGORY,
                self.posts_per_category
            );
        }

        // The oldest createdAt sits one hour before the last publishedAt
        let total = category_count.saturating_mul(self.posts_per_category) as i64;
        let span = Duration::hours(total * 3 + 1);
        if self.base_date.checked_sub_signed(span).is_none() {
            anyhow::bail!(
                "generation.base_date {} is too early for {} posts",
                self.base_date,
                total
            );
        }

        Ok(())
    }
}

fn default_posts_per_category() -> usize {
    12
}

fn default_output_path() -> String {
    "src/services/mockData.js".to_string()
}

/// Load config from `path`, falling back to defaults when the file is absent
pub fn load_config(path: &Path) -> Result<MockgenConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(MockgenConfig::default());
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: MockgenConfig = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    config
        .generation
        .validate(content::news_tables().len())
        .with_context(|| format!("Invalid {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MockgenConfig::default();
        assert_eq!(config.generation.posts_per_category, 12);
        assert_eq!(
            config.generation.base_date,
            Utc.with_ymd_and_hms(2026, 2, 13, 10, 0, 0).unwrap()
        );
        assert_eq!(config.output.path, "src/services/mockData.js");
        assert_eq!(config.output.format, OutputFormat::Js);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("absent.yaml")).unwrap();
        assert_eq!(config.generation.posts_per_category, 12);
    }

    #[test]
    fn test_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mockgen.yaml");
        let yaml = r#"
generation:
  posts_per_category: 14
output:
  format: json
        "#;
        fs::write(&path, yaml).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.generation.posts_per_category, 14);
        assert_eq!(config.generation.base_date, default_base_date());
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.path, "src/services/mockData.js");
    }

    #[test]
    fn test_base_date_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mockgen.yaml");
        fs::write(&path, "generation:\n  base_date: \"2025-01-01T00:00:00Z\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(
            config.generation.base_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mockgen.yaml");
        fs::write(&path, "generation: [not, a, map").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_posts_per_category_too_large() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mockgen.yaml");
        fs::write(
            &path,
            "generation:\n  posts_per_category: 18446744073709551615\n",
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("posts_per_category must be at most"));
    }

    #[test]
    fn test_base_date_too_early() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mockgen.yaml");
        fs::write(
            &path,
            "generation:\n  base_date: \"-262143-01-02T00:00:00Z\"\n",
        )
        .unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("is too early"));
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = GenerationConfig::default();
        assert!(config.validate(5).is_ok());

        config.posts_per_category = MAX_POSTS_PER_CATEGORY;
        assert!(config.validate(5).is_ok());

        config.posts_per_category = MAX_POSTS_PER_CATEGORY + 1;
        assert!(config.validate(5).is_err());
    }
}
