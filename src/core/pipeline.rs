use crate::adapters::{qr, spreadsheet};
use crate::core::{ConfigProvider, LabelRow, Pipeline, Storage, TransformResult};
use crate::domain::model::BadgeRecord;
use crate::utils::error::Result;
use crate::utils::sanitize::sanitize_filename;

pub struct BadgePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> BadgePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for BadgePipeline<S, C> {
    fn extract(&self) -> Result<Vec<LabelRow>> {
        tracing::debug!("Reading input table: {}", self.config.input_file());
        let bytes = self.storage.read_file(self.config.input_file())?;
        spreadsheet::read_label_rows(&bytes, self.config.input_file())
    }

    fn transform(&self, rows: Vec<LabelRow>) -> Result<TransformResult> {
        // 先確保輸出目錄存在（空輸入也要建立）
        self.storage.create_dir_all(self.config.output_dir())?;

        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let sanitized = sanitize_filename(&row.label);
            let id = self.config.starting_id() + index as i64;
            let image_path = format!("{}/{}_{}.png", self.config.output_dir(), sanitized, id);

            let png = qr::render_qr_png(&id.to_string())?;
            self.storage.write_file(&image_path, &png)?;
            tracing::debug!("Rendered QR {} -> {}", id, image_path);

            records.push(BadgeRecord {
                id,
                name: row.label,
                qr_code_path: image_path,
            });
        }

        Ok(TransformResult { records })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_file = self.config.output_file();
        let bytes = spreadsheet::write_records(&result.records, output_file)?;

        tracing::debug!(
            "Writing output table ({} rows, {} bytes) to {}",
            result.records.len(),
            bytes.len(),
            output_file
        );
        self.storage.write_file(output_file, &bytes)?;

        Ok(output_file.to_string())
    }
}
