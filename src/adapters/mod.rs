// Adapters layer: codecs for the external formats (spreadsheet tables, QR images).

pub mod qr;
pub mod spreadsheet;
