use anyhow::Result;
use rsvp_emails::{CliConfig, LocalStorage, RosterEngine, RosterPipeline, TomlConfig};
use tempfile::TempDir;

fn cli_config(input: &str, output: &str) -> CliConfig {
    CliConfig {
        input: input.to_string(),
        input_format: "text".to_string(),
        csv_column: "email".to_string(),
        domain: None,
        output_path: output.to_string(),
        output_formats: vec!["json".to_string()],
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_text_roster() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("guests.txt");
    let output = temp_dir.path().join("reports");

    std::fs::write(
        &input,
        "ALICE@x.com\nalice@x.com\nno-at-sign\nbob@Y.com\ncarol@y.com\n",
    )?;

    let mut config = cli_config(input.to_str().unwrap(), output.to_str().unwrap());
    config.domain = Some("Y.COM".to_string());
    config.output_formats = vec!["json".to_string(), "txt".to_string(), "csv".to_string()];

    let engine = RosterEngine::new(RosterPipeline::new(LocalStorage::default(), config));
    let written = engine.run().await?;

    assert!(written.contains("roster_report.json"));
    assert!(written.contains("roster_report.txt"));
    assert!(written.contains("roster_report.csv"));

    let txt = std::fs::read_to_string(output.join("roster_report.txt"))?;
    assert_eq!(txt, "ALICE@x.com\nbob@Y.com\ncarol@y.com\n");

    let csv = std::fs::read_to_string(output.join("roster_report.csv"))?;
    assert_eq!(csv, "domain,count\nx.com,2\ny.com,2\n");

    let json: serde_json::Value =
        serde_json::from_slice(&std::fs::read(output.join("roster_report.json"))?)?;
    assert_eq!(json["total_entries"], 5);
    assert_eq!(json["well_formed"], 4);
    assert_eq!(json["malformed"], 1);
    assert_eq!(json["first_match"]["index"], 3);
    assert_eq!(json["first_match"]["email"], "bob@Y.com");
    assert_eq!(json["target_domain"], "Y.COM");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_csv_roster() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_path_buf();

    std::fs::write(
        base.join("rsvp.csv"),
        "name,contact,plus_one\nAnn,ann@Party.org,yes\nBen,ben@example.com,no\nAnn again,ANN@party.org,no\n",
    )?;

    let mut config = cli_config("rsvp.csv", "out");
    config.input_format = "csv".to_string();
    config.csv_column = "contact".to_string();
    config.output_formats = vec!["txt".to_string()];

    let engine = RosterEngine::new(RosterPipeline::new(LocalStorage::new(&base), config));
    let written = engine.run().await?;

    assert_eq!(written, "out/roster_report.txt");
    let txt = std::fs::read_to_string(base.join("out/roster_report.txt"))?;
    assert_eq!(txt, "ann@Party.org\nben@example.com\n");

    Ok(())
}

#[tokio::test]
async fn test_missing_roster_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = cli_config("does-not-exist.txt", "out");

    let engine = RosterEngine::new(RosterPipeline::new(LocalStorage::new(temp_dir.path()), config));
    let err = engine.run().await.unwrap_err();

    assert_eq!(err.exit_code(), 3);
    assert!(!temp_dir.path().join("out").exists());

    Ok(())
}

#[tokio::test]
async fn test_toml_driven_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let base = temp_dir.path().to_path_buf();
    std::fs::write(base.join("guests.txt"), "a@Z.com\nb@a.com\n")?;

    let config = TomlConfig::from_toml_str(
        r#"
[input]
path = "guests.txt"

[query]
domain = "z.com"

[output]
path = "reports"
formats = ["csv"]
"#,
    )?;

    let engine = RosterEngine::new(RosterPipeline::new(LocalStorage::new(&base), config));
    engine.run().await?;

    let csv = std::fs::read_to_string(base.join("reports/roster_report.csv"))?;
    assert_eq!(csv, "domain,count\na.com,1\nz.com,1\n");

    Ok(())
}
