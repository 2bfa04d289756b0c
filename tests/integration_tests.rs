use calamine::{open_workbook_auto, Data, Reader};
use qr_badge_etl::{BadgePipeline, CliConfig, EtlEngine, LocalStorage};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn write_input_xlsx(path: &std::path::Path, labels: &[&str]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Etiqueta").unwrap();
    for (i, label) in labels.iter().enumerate() {
        worksheet.write_string((i + 1) as u32, 0, *label).unwrap();
    }
    workbook.save(path).unwrap();
}

fn make_config(temp_dir: &TempDir, starting_id: i64) -> CliConfig {
    CliConfig {
        input_file: temp_dir.path().join("input.xlsx").to_str().unwrap().to_string(),
        output_dir: temp_dir.path().join("qr_codes").to_str().unwrap().to_string(),
        output_file: temp_dir.path().join("output.xlsx").to_str().unwrap().to_string(),
        starting_id,
        verbose: false,
        monitor: false,
    }
}

fn read_output_rows(path: &std::path::Path) -> Vec<Vec<Data>> {
    let mut workbook = open_workbook_auto(path).unwrap();
    let sheet_name = workbook.sheet_names().first().cloned().unwrap();
    let range = workbook.worksheet_range(&sheet_name).unwrap();
    range.rows().map(|row| row.to_vec()).collect()
}

#[test]
fn test_end_to_end_xlsx_batch() {
    let temp_dir = TempDir::new().unwrap();
    write_input_xlsx(&temp_dir.path().join("input.xlsx"), &["Jane/Doe", "A:B"]);

    let config = make_config(&temp_dir, 100);
    let output_dir = temp_dir.path().join("qr_codes");
    let output_file = temp_dir.path().join("output.xlsx");

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BadgePipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, false);

    let result = engine.run();
    assert!(result.is_ok());
    assert!(output_file.exists());

    // output table: header + one row per input row, ids sequential from 100
    let rows = read_output_rows(&output_file);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], Data::String("ID".to_string()));
    assert_eq!(rows[0][1], Data::String("Name".to_string()));
    assert_eq!(rows[0][2], Data::String("QRCodePath".to_string()));

    assert_eq!(rows[1][0], Data::Float(100.0));
    assert_eq!(rows[1][1], Data::String("Jane/Doe".to_string()));
    let jane_path = format!("{}/Jane_Doe_100.png", output_dir.to_str().unwrap());
    assert_eq!(rows[1][2], Data::String(jane_path.clone()));

    assert_eq!(rows[2][0], Data::Float(101.0));
    assert_eq!(rows[2][1], Data::String("A:B".to_string()));
    let ab_path = format!("{}/A_B_101.png", output_dir.to_str().unwrap());
    assert_eq!(rows[2][2], Data::String(ab_path.clone()));

    // both PNG files exist at the recorded paths
    for path in [&jane_path, &ab_path] {
        let png = std::fs::read(path).unwrap();
        assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
    }
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 2);
}

#[test]
fn test_end_to_end_empty_input() {
    let temp_dir = TempDir::new().unwrap();
    write_input_xlsx(&temp_dir.path().join("input.xlsx"), &[]);

    let config = make_config(&temp_dir, 100);
    let output_dir = temp_dir.path().join("qr_codes");
    let output_file = temp_dir.path().join("output.xlsx");

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BadgePipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let result = engine.run();
    assert!(result.is_ok());

    // output directory is still created, but stays empty
    assert!(output_dir.is_dir());
    assert_eq!(std::fs::read_dir(&output_dir).unwrap().count(), 0);

    // output table holds the header row only
    let rows = read_output_rows(&output_file);
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_custom_starting_id() {
    let temp_dir = TempDir::new().unwrap();
    write_input_xlsx(&temp_dir.path().join("input.xlsx"), &["Uno", "Dos", "Tres"]);

    let config = make_config(&temp_dir, 1061);
    let output_file = temp_dir.path().join("output.xlsx");

    let storage = LocalStorage::new(".".to_string());
    let pipeline = BadgePipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    engine.run().unwrap();

    let rows = read_output_rows(&output_file);
    let ids: Vec<f64> = rows[1..]
        .iter()
        .map(|row| match row[0] {
            Data::Float(v) => v,
            ref other => panic!("expected numeric id, got {:?}", other),
        })
        .collect();
    assert_eq!(ids, vec![1061.0, 1062.0, 1063.0]);
}
