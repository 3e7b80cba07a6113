use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Prefix for the reference implementation label
pub const REF_IMPLEMENTATION_PREFIX: &str = "Reference Implementation";

/// Prefix for an implementation under comparison
pub const IMPLEMENTATION_PREFIX: &str = "Impl";

/// A code repository taking part in the comparison
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Repository {
    pub name: String,
    pub url: String,
}

impl Repository {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    /// `"<prefix>: <url>"`
    pub fn label(&self, prefix: &str) -> String {
        format!("{}: {}", prefix, self.url)
    }
}

/// Column widths of the compatibility report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    pub metric_width: usize,
    pub value_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            metric_width: 35,
            value_width: 15,
        }
    }
}

/// Shared frame drawn around every wizard step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StyleConfig {
    pub width: u16,
    /// ANSI 256-colour index of the border
    pub border_color: u8,
    pub padding_top: u16,
    pub padding_left: u16,
    pub bold: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 124,
            border_color: 102,
            padding_top: 1,
            padding_left: 1,
            bold: false,
        }
    }
}

/// Root configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Repository every implementation is compared against
    pub reference: Repository,

    /// Implementations offered in the wizard
    pub implementations: Vec<Repository>,

    pub report: ReportConfig,

    pub style: StyleConfig,

    /// Log destination while the wizard owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: Repository::new("graphql-js", "https://github.com/graphql/graphql-js"),
            implementations: vec![Repository::new(
                "graphql-go",
                "https://github.com/graphql-go/graphql",
            )],
            report: ReportConfig::default(),
            style: StyleConfig::default(),
            log_file: None,
        }
    }
}

impl Config {
    /// URLs of the implementations, in configured order
    pub fn implementation_urls(&self) -> Vec<String> {
        self.implementations.iter().map(|r| r.url.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.reference.name, "graphql-js");
        assert_eq!(config.implementation_urls(), vec!["https://github.com/graphql-go/graphql"]);
        assert_eq!(config.report.metric_width, 35);
        assert_eq!(config.style.width, 124);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_repository_label() {
        let repo = Repository::new("graphql-js", "https://github.com/graphql/graphql-js");
        assert_eq!(
            repo.label(REF_IMPLEMENTATION_PREFIX),
            "Reference Implementation: https://github.com/graphql/graphql-js"
        );
    }
}
