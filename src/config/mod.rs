pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
const TABLE_EXTENSIONS: [&str; 2] = ["xlsx", "csv"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "qr-badge-etl")]
#[command(about = "Batch-generate QR badge images from a spreadsheet of labels")]
pub struct CliConfig {
    /// Input table (.xlsx or .csv) with an `Etiqueta` column
    #[arg(long, default_value = "./input.xlsx")]
    pub input_file: String,

    /// Directory that receives one PNG per input row
    #[arg(long, default_value = "./qr_codes")]
    pub output_dir: String,

    /// Output table (.xlsx or .csv) mapping ID, Name, QRCodePath
    #[arg(long, default_value = "./output.xlsx")]
    pub output_file: String,

    /// First identifier; row N gets starting-id + N. Ids are not guarded
    /// across runs, so pick non-overlapping ranges between batches
    #[arg(long, default_value = "100")]
    pub starting_id: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn starting_id(&self) -> i64 {
        self.starting_id
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_file", &self.input_file)?;
        validation::validate_path("output_dir", &self.output_dir)?;
        validation::validate_path("output_file", &self.output_file)?;
        validation::validate_file_extension("input_file", &self.input_file, &TABLE_EXTENSIONS)?;
        validation::validate_file_extension("output_file", &self.output_file, &TABLE_EXTENSIONS)?;
        Ok(())
    }
}
