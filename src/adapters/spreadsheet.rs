//! Table codec: read the label column out of an input table, write the
//! finished records back out. Both directions work on bytes so storage
//! stays behind the `Storage` port; the format is picked by file extension.

use crate::domain::model::{BadgeRecord, LabelRow};
use crate::utils::error::{EtlError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::{Format, Workbook};
use std::io::Cursor;
use std::path::Path;

/// 輸入表必須有的欄位名（逐字匹配）
pub const LABEL_COLUMN: &str = "Etiqueta";

pub const OUTPUT_HEADERS: [&str; 3] = ["ID", "Name", "QRCodePath"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Xlsx,
    Csv,
}

impl TableFormat {
    pub fn from_path(path: &str) -> Result<Self> {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Ok(TableFormat::Xlsx),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(TableFormat::Csv),
            _ => Err(EtlError::InvalidConfigValueError {
                field: "table_format".to_string(),
                value: path.to_string(),
                reason: "Expected a .xlsx or .csv file".to_string(),
            }),
        }
    }
}

/// Parse the input table and return its label rows, in table order.
pub fn read_label_rows(bytes: &[u8], path: &str) -> Result<Vec<LabelRow>> {
    match TableFormat::from_path(path)? {
        TableFormat::Xlsx => read_label_rows_xlsx(bytes, path),
        TableFormat::Csv => read_label_rows_csv(bytes, path),
    }
}

/// Serialize the records as a table, columns `ID`, `Name`, `QRCodePath`.
pub fn write_records(records: &[BadgeRecord], path: &str) -> Result<Vec<u8>> {
    match TableFormat::from_path(path)? {
        TableFormat::Xlsx => write_records_xlsx(records),
        TableFormat::Csv => write_records_csv(records),
    }
}

fn missing_column(path: &str) -> EtlError {
    EtlError::MissingColumnError {
        column: LABEL_COLUMN.to_string(),
        file: path.to_string(),
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => format!("{v}"),
        Data::Bool(v) => v.to_string(),
        other => other.to_string(),
    }
}

fn read_label_rows_xlsx(bytes: &[u8], path: &str) -> Result<Vec<LabelRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    // 只取第一張 sheet
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| missing_column(path))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| missing_column(path))?;
    let label_idx = header_row
        .iter()
        .position(|cell| cell_to_string(cell).trim() == LABEL_COLUMN)
        .ok_or_else(|| missing_column(path))?;

    Ok(rows
        .map(|row| LabelRow {
            label: row.get(label_idx).map(cell_to_string).unwrap_or_default(),
        })
        .collect())
}

fn read_label_rows_csv(bytes: &[u8], path: &str) -> Result<Vec<LabelRow>> {
    let mut reader = csv::Reader::from_reader(bytes);
    let label_idx = reader
        .headers()?
        .iter()
        .position(|header| header.trim() == LABEL_COLUMN)
        .ok_or_else(|| missing_column(path))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(LabelRow {
            label: record.get(label_idx).unwrap_or_default().to_string(),
        });
    }
    Ok(rows)
}

fn write_records_xlsx(records: &[BadgeRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header_format = Format::new().set_bold();

    for (col, header) in OUTPUT_HEADERS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_number(row, 0, record.id as f64)?;
        worksheet.write_string(row, 1, &record.name)?;
        worksheet.write_string(row, 2, &record.qr_code_path)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_records_csv(records: &[BadgeRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(vec![]);

    // serialize 會從欄位 rename 產生表頭；空批次也要有表頭
    if records.is_empty() {
        writer.write_record(OUTPUT_HEADERS)?;
    }
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))
}
