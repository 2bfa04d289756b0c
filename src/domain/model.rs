use serde::Serialize;

/// 輸入表的一列：`Etiqueta` 欄的顯示名稱
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRow {
    pub label: String,
}

/// One finished badge: id, original name, path of the rendered QR image.
/// Serialized once into the output table; column names follow the renames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "QRCodePath")]
    pub qr_code_path: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<BadgeRecord>,
}
