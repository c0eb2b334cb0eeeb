use crate::core::pipeline::{INPUT_FORMATS, OUTPUT_FORMATS};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub query: QueryConfig,
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    #[serde(default = "default_input_format")]
    pub format: String,
    #[serde(default = "default_csv_column")]
    pub csv_column: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryConfig {
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    #[serde(default = "default_output_formats")]
    pub formats: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

fn default_input_format() -> String {
    "text".to_string()
}

fn default_csv_column() -> String {
    "email".to_string()
}

fn default_output_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RosterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the value of `VAR`. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RosterError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn verbose(&self) -> bool {
        self.logging.as_ref().map(|l| l.verbose).unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.input.path.as_deref().unwrap_or_default()
    }

    fn input_format(&self) -> &str {
        &self.input.format
    }

    fn csv_column(&self) -> &str {
        &self.input.csv_column
    }

    fn target_domain(&self) -> Option<&str> {
        self.query.domain.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.formats
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let input = validation::validate_required_field("input.path", &self.input.path)?;
        validation::validate_path("input.path", input)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_one_of(
            "input.format",
            std::slice::from_ref(&self.input.format),
            INPUT_FORMATS,
        )?;
        if self.input.format == "csv" {
            validation::validate_non_empty_string("input.csv_column", &self.input.csv_column)?;
        }
        validation::validate_one_of("output.formats", &self.output.formats, OUTPUT_FORMATS)
    }
}
