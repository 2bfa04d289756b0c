use crate::domain::model::{LabelRow, TransformResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
    fn create_dir_all(&self, path: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn output_file(&self) -> &str;
    fn starting_id(&self) -> i64;
}

/// 批次流程的三個階段，嚴格依序執行
pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<LabelRow>>;
    fn transform(&self, rows: Vec<LabelRow>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
