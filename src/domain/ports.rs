use crate::domain::model::{Roster, RosterReport};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    /// `text` or `csv`.
    fn input_format(&self) -> &str;
    fn csv_column(&self) -> &str;
    fn target_domain(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Roster>;
    async fn transform(&self, roster: Roster) -> Result<RosterReport>;
    async fn load(&self, report: RosterReport) -> Result<String>;
}
