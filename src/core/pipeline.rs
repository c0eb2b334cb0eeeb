use crate::core::{ConfigProvider, Pipeline, Roster, RosterReport, Storage};
use crate::utils::error::{Result, RosterError};

pub const REPORT_BASENAME: &str = "roster_report";
pub const INPUT_FORMATS: &[&str] = &["text", "csv"];
pub const OUTPUT_FORMATS: &[&str] = &["csv", "json", "txt"];

pub struct RosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> RosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render(&self, format: &str, report: &RosterReport) -> Result<Vec<u8>> {
        match format {
            "csv" => render_domain_counts_csv(report),
            "json" => Ok(serde_json::to_vec_pretty(report)?),
            "txt" => Ok(render_unique_emails(report).into_bytes()),
            other => Err(RosterError::InvalidConfigValueError {
                field: "output_formats".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", OUTPUT_FORMATS.join(", ")),
            }),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RosterPipeline<S, C> {
    async fn extract(&self) -> Result<Roster> {
        let path = self.config.input_path();
        tracing::debug!("Reading roster from: {}", path);
        let data = self.storage.read_file(path).await?;

        let entries = match self.config.input_format() {
            "text" => parse_text_roster(&data)?,
            "csv" => parse_csv_roster(&data, self.config.csv_column())?,
            other => {
                return Err(RosterError::InvalidConfigValueError {
                    field: "input_format".to_string(),
                    value: other.to_string(),
                    reason: format!("Valid formats: {}", INPUT_FORMATS.join(", ")),
                })
            }
        };

        tracing::debug!("Parsed {} entries", entries.len());
        Ok(Roster::new(path, entries))
    }

    async fn transform(&self, roster: Roster) -> Result<RosterReport> {
        let report = RosterReport::build(&roster, self.config.target_domain());

        if report.malformed > 0 {
            tracing::warn!("Skipped {} entries without '@'", report.malformed);
        }
        if let Some(domain) = &report.target_domain {
            match &report.first_match {
                Some(m) => tracing::info!("First '{}' entry at index {}: {}", domain, m.index, m.email),
                None => tracing::info!("No entry found for domain '{}'", domain),
            }
        }

        Ok(report)
    }

    async fn load(&self, report: RosterReport) -> Result<String> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let data = self.render(format, &report)?;
            let path = format!("{}/{}.{}", self.config.output_path(), REPORT_BASENAME, format);

            tracing::debug!("Writing {} report ({} bytes) to {}", format, data.len(), path);
            self.storage.write_file(&path, &data).await?;
            written.push(path);
        }

        Ok(written.join(", "))
    }
}

/// One entry per line. Lines are kept verbatim apart from the line terminator.
pub fn parse_text_roster(data: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(data).map_err(|e| RosterError::ValidationError {
        message: format!("Roster is not valid UTF-8: {}", e),
    })?;

    Ok(text.lines().map(str::to_string).collect())
}

/// Reads the named column from a CSV document with a header row.
pub fn parse_csv_roster(data: &[u8], column: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let index = reader
        .headers()?
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| RosterError::ValidationError {
            message: format!("CSV column '{}' not found in header", column),
        })?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record?;
        entries.push(record.get(index).unwrap_or_default().to_string());
    }

    Ok(entries)
}

fn render_domain_counts_csv(report: &RosterReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["domain", "count"])?;
    for row in &report.domain_counts {
        writer.write_record([row.domain.as_str(), row.count.to_string().as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| RosterError::IoError(e.into_error()))
}

fn render_unique_emails(report: &RosterReport) -> String {
    let mut out = String::new();
    for email in &report.unique_emails {
        out.push_str(email);
        out.push('\n');
    }
    out
}
