pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::pipeline::{INPUT_FORMATS, OUTPUT_FORMATS};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rsvp-emails")]
#[command(about = "Deduplicate an RSVP email list and summarize it by domain")]
pub struct CliConfig {
    /// Roster file to read
    #[arg(short, long)]
    pub input: String,

    #[arg(long, default_value = "text", help = "Input format: text or csv")]
    pub input_format: String,

    #[arg(long, default_value = "email", help = "Column holding the email in CSV input")]
    pub csv_column: String,

    #[arg(short, long, help = "Report the first entry with this domain")]
    pub domain: Option<String>,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub output_formats: Vec<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn input_format(&self) -> &str {
        &self.input_format
    }

    fn csv_column(&self) -> &str {
        &self.csv_column
    }

    fn target_domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output_formats
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_one_of(
            "input_format",
            std::slice::from_ref(&self.input_format),
            INPUT_FORMATS,
        )?;
        if self.input_format == "csv" {
            validation::validate_non_empty_string("csv_column", &self.csv_column)?;
        }
        validation::validate_one_of("output_formats", &self.output_formats, OUTPUT_FORMATS)
    }
}
