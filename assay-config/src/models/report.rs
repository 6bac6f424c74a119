//! Report settings and where they are loaded from.

use anyhow::{Context, anyhow};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::util::{non_empty, parse_bool};

/// Longest rendered value kept verbatim in a report, in bytes. Matches the
/// default token limit of line scanners minus room for the label prefix.
pub const DEFAULT_TRUNCATE_LIMIT: usize = 64 * 1024 - 100;

/// Path of a TOML or JSON report config file.
pub const CONFIG_PATH_ENV: &str = "ASSAY_CONFIG_PATH";
/// Inline JSON report config.
pub const CONFIG_JSON_ENV: &str = "ASSAY_CONFIG_JSON";
/// Override for [`ReportConfig::failure_mode`].
pub const FAILURE_MODE_ENV: &str = "ASSAY_FAILURE_MODE";
/// Override for [`ReportConfig::truncate_limit`].
pub const TRUNCATE_LIMIT_ENV: &str = "ASSAY_TRUNCATE_LIMIT";
/// Override for [`ReportConfig::include_test_name`].
pub const INCLUDE_TEST_NAME_ENV: &str = "ASSAY_INCLUDE_TEST_NAME";

/// What an assertion facade does after it reported a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Call `TestingT::fail_now`, ending the test at the first failure.
    #[default]
    FailNow,
    /// Keep going; the failure stays recorded in the sink.
    Continue,
}

impl FromStr for FailureMode {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fail_now" | "fail-now" | "failnow" => Ok(FailureMode::FailNow),
            "continue" => Ok(FailureMode::Continue),
            other => Err(anyhow!(
                "unknown failure mode `{other}` \
                 (expected `fail_now` or `continue`)"
            )),
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureMode::FailNow => f.write_str("fail_now"),
            FailureMode::Continue => f.write_str("continue"),
        }
    }
}

/// Source that produced the report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReportConfigSource {
    /// Nothing configured, built-in defaults.
    #[default]
    Default,
    /// File named by `$ASSAY_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON taken from `$ASSAY_CONFIG_JSON`.
    EnvInline,
    /// Conventional file discovered in the working directory.
    File(PathBuf),
}

/// Settings that shape assertion failure reports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Behaviour after a failed assertion when the facade has no explicit
    /// `on_failure` hook.
    pub failure_mode: FailureMode,
    /// Rendered values longer than this many bytes are cut and suffixed with
    /// `<... truncated>`.
    pub truncate_limit: usize,
    /// Add a `Test` label when the sink knows the running test's name.
    pub include_test_name: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            failure_mode: FailureMode::FailNow,
            truncate_limit: DEFAULT_TRUNCATE_LIMIT,
            include_test_name: true,
        }
    }
}

static GLOBAL: OnceCell<ReportConfig> = OnceCell::new();

impl ReportConfig {
    /// Process-wide configuration, loaded from the environment on first use.
    /// Falls back to defaults when loading fails.
    pub fn global() -> &'static ReportConfig {
        GLOBAL.get_or_init(|| match Self::load_from_env() {
            Ok((config, source)) => {
                tracing::debug!(
                    ?source,
                    failure_mode = %config.failure_mode,
                    truncate_limit = config.truncate_limit,
                    "loaded assay report config"
                );
                config
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "invalid assay report config, using defaults"
                );
                Self::default()
            }
        })
    }

    /// Load report configuration using environment variables.
    /// Evaluation order:
    /// 1) `$ASSAY_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ASSAY_CONFIG_JSON` (inline JSON),
    /// 3) `assay.toml` / `assay.json` in the working directory or `config/`,
    /// 4) defaults.
    ///
    /// `$ASSAY_FAILURE_MODE`, `$ASSAY_TRUNCATE_LIMIT` and
    /// `$ASSAY_INCLUDE_TEST_NAME` override single fields afterwards.
    pub fn load_from_env() -> anyhow::Result<(Self, ReportConfigSource)> {
        Self::load_with(&|name| env::var(name).ok())
    }

    /// Same as [`ReportConfig::load_from_env`] with a custom variable lookup.
    pub fn load_with(
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, ReportConfigSource)> {
        let (mut config, source) = Self::load_base(lookup)?;
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok((config, source))
    }

    fn load_base(
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> anyhow::Result<(Self, ReportConfigSource)> {
        if let Some(path_str) = non_empty(lookup, CONFIG_PATH_ENV) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ReportConfigSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty(lookup, CONFIG_JSON_ENV) {
            let parsed = ConfigFormat::Json.parse(&raw, CONFIG_JSON_ENV)?;
            return Ok((parsed, ReportConfigSource::EnvInline));
        }

        if let Some(path) = env::current_dir()
            .ok()
            .and_then(|dir| Self::find_default_file(&dir))
        {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ReportConfigSource::File(path)));
        }

        Ok((Self::default(), ReportConfigSource::Default))
    }

    /// Apply single-field overrides on top of a loaded configuration.
    pub fn apply_overrides(
        &mut self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(raw) = non_empty(lookup, FAILURE_MODE_ENV) {
            self.failure_mode = raw
                .parse()
                .with_context(|| format!("invalid {FAILURE_MODE_ENV}"))?;
        }

        if let Some(raw) = non_empty(lookup, TRUNCATE_LIMIT_ENV) {
            self.truncate_limit = raw.trim().parse().with_context(|| {
                format!("invalid {TRUNCATE_LIMIT_ENV} `{raw}`")
            })?;
        }

        if let Some(raw) = non_empty(lookup, INCLUDE_TEST_NAME_ENV) {
            self.include_test_name = parse_bool(&raw).ok_or_else(|| {
                anyhow!("invalid {INCLUDE_TEST_NAME_ENV} `{raw}`")
            })?;
        }

        Ok(())
    }

    /// Load a report config file; the extension picks the format, other
    /// files are tried as TOML and then JSON.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read report config {}", path.display())
        })?;
        let origin = path.display().to_string();
        match ConfigFormat::from_path(path) {
            Some(format) => format.parse(&contents, &origin),
            None => Self::parse_from_str(&contents, &origin),
        }
    }

    /// Parse a report config of unknown format, TOML first.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        ConfigFormat::Toml.parse(contents, origin).or_else(|toml_err| {
            ConfigFormat::Json.parse(contents, origin).map_err(|json_err| {
                anyhow!(
                    "{origin} is neither a TOML nor a JSON report config \
                     ({toml_err:#}; {json_err:#})"
                )
            })
        })
    }

    /// First conventional config file that exists under `dir`: `assay.toml`,
    /// `assay.json`, then the same names under `config/`.
    pub fn find_default_file(dir: &Path) -> Option<PathBuf> {
        ["", "config"]
            .iter()
            .flat_map(|subdir| {
                ConfigFormat::ALL.iter().map(move |format| {
                    dir.join(subdir)
                        .join(format!("assay.{}", format.extension()))
                })
            })
            .find(|path| path.is_file())
    }
}

/// Serialization formats a report config may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    const ALL: [ConfigFormat; 2] = [ConfigFormat::Toml, ConfigFormat::Json];

    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str())? {
            "toml" | "tml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    const fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn parse(
        self,
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<ReportConfig> {
        let parsed = match self {
            ConfigFormat::Toml => {
                toml::from_str(contents).map_err(anyhow::Error::from)
            }
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(anyhow::Error::from)
            }
        };
        parsed.with_context(|| {
            format!(
                "{origin}: expected {} with `failure_mode`, `truncate_limit` \
                 or `include_test_name`",
                self.extension().to_uppercase()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_mode_accepts_common_spellings() {
        assert_eq!(
            "fail-now".parse::<FailureMode>().ok(),
            Some(FailureMode::FailNow)
        );
        assert_eq!(
            " Continue ".parse::<FailureMode>().ok(),
            Some(FailureMode::Continue)
        );
        assert!("explode".parse::<FailureMode>().is_err());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let raw = "failure_mode = \"continue\"";
        let config =
            ReportConfig::parse_from_str(raw, "inline").expect("valid toml");
        assert_eq!(config.failure_mode, FailureMode::Continue);
        assert_eq!(config.truncate_limit, DEFAULT_TRUNCATE_LIMIT);
        assert!(config.include_test_name);
    }

    #[test]
    fn parse_from_str_falls_back_to_json() {
        let raw = r#"{"truncate_limit": 12}"#;
        let config =
            ReportConfig::parse_from_str(raw, "inline").expect("valid json");
        assert_eq!(config.truncate_limit, 12);
    }

    #[test]
    fn extension_picks_the_format() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("assay.tml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config/assay.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("assay.conf")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("assay")), None);
    }

    #[test]
    fn format_errors_name_origin_and_fields() {
        let err = ConfigFormat::Json
            .parse("failure_mode = 1", CONFIG_JSON_ENV)
            .expect_err("toml is not json");
        let rendered = err.to_string();
        assert!(rendered.starts_with(CONFIG_JSON_ENV), "{rendered}");
        assert!(rendered.contains("expected JSON"), "{rendered}");
        assert!(rendered.contains("`truncate_limit`"), "{rendered}");
    }

    #[test]
    fn unknown_format_reports_both_attempts() {
        let err = ReportConfig::parse_from_str("{ nope", "inline")
            .expect_err("neither format");
        let rendered = err.to_string();
        assert!(
            rendered.starts_with("inline is neither a TOML nor a JSON"),
            "{rendered}"
        );
        assert!(rendered.contains("expected TOML"), "{rendered}");
        assert!(rendered.contains("expected JSON"), "{rendered}");
    }

    #[test]
    fn overrides_apply_on_top_of_inline_json() {
        let lookup = |name: &str| match name {
            CONFIG_JSON_ENV => Some(r#"{"truncate_limit": 64}"#.to_string()),
            FAILURE_MODE_ENV => Some("continue".to_string()),
            INCLUDE_TEST_NAME_ENV => Some("off".to_string()),
            _ => None,
        };
        let (config, source) =
            ReportConfig::load_with(&lookup).expect("config loads");
        assert_eq!(source, ReportConfigSource::EnvInline);
        assert_eq!(config.truncate_limit, 64);
        assert_eq!(config.failure_mode, FailureMode::Continue);
        assert!(!config.include_test_name);
    }

    #[test]
    fn invalid_override_is_an_error() {
        let lookup = |name: &str| match name {
            TRUNCATE_LIMIT_ENV => Some("lots".to_string()),
            _ => None,
        };
        assert!(ReportConfig::load_with(&lookup).is_err());
    }

    #[test]
    fn zero_truncate_limit_is_rejected() {
        let lookup = |name: &str| match name {
            TRUNCATE_LIMIT_ENV => Some("0".to_string()),
            _ => None,
        };
        let err = ReportConfig::load_with(&lookup).expect_err("guard rail");
        assert!(err.to_string().contains("truncate_limit"));
    }
}
