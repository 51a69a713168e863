use anyhow::{Context, anyhow};
use multisort_core::{Comparator, SortError, compile_json};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "MULTISORT_CONFIG_PATH";
/// Environment variable carrying an inline JSON config.
pub const CONFIG_JSON_VAR: &str = "MULTISORT_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "multisort.toml",
    "multisort.json",
    "config/multisort.toml",
    "config/multisort.json",
];

/// Source that produced the sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Settings for a sort run. Everything here can be overridden from the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortConfig {
    /// Criteria in priority order. Numbers sort the items themselves (a
    /// negative number means descending); strings are path expressions such
    /// as `"~name.last"` or `"tags.includes(\"rock\")?"`. An empty list keeps
    /// the items' natural order.
    pub criteria: Vec<serde_json::Value>,
    /// JSON pointer (`/data/items`) to the array inside the input document.
    /// The document root is used when unset.
    pub pointer: Option<String>,
    /// Pretty-print the sorted document.
    pub pretty: bool,
}

impl SortConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$MULTISORT_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MULTISORT_CONFIG_JSON` (inline JSON),
    /// 3) the first default file that exists,
    /// 4) defaults.
    pub fn load_from_env() -> anyhow::Result<(Self, SortConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, SortConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, SortConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, SortConfigSource::File(path)));
        }

        Ok((Self::default(), SortConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read sort config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid sort config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!("invalid sort config {}: {}", path.display(), err)
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // Try TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse sort config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid sort config json: {err}"))
    }

    /// First default config file under the working directory.
    pub fn find_default_file() -> Option<PathBuf> {
        Self::find_default_file_in(Path::new("."))
    }

    pub fn find_default_file_in(root: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.is_file())
    }

    /// Replace criteria from command-line `--by` values. Numeric text
    /// becomes a signed criterion, anything else a path.
    pub fn with_criteria_args<S: AsRef<str>>(mut self, args: &[S]) -> Self {
        if !args.is_empty() {
            self.criteria =
                args.iter().map(|arg| criterion_arg(arg.as_ref())).collect();
        }
        self
    }

    /// Compile the configured criteria for JSON documents. Entries that are
    /// neither numbers nor strings are configuration errors.
    pub fn comparator(
        &self,
    ) -> Result<Comparator<serde_json::Value>, SortError> {
        if self.criteria.is_empty() {
            return compile_json(&serde_json::Value::from(""));
        }
        compile_json(&serde_json::Value::Array(self.criteria.clone()))
    }
}

fn criterion_arg(arg: &str) -> serde_json::Value {
    match arg.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => serde_json::Value::from(n),
        _ => serde_json::Value::from(arg),
    }
}
