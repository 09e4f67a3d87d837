use tempfile::TempDir;

use crate::app::services::adif_writer::planner::FilePlan;
use crate::app::services::adif_writer::tests::create_test_pota_qso;
use crate::app::services::adif_writer::write_plans;

fn create_test_plan(operator: &str, park: &str, dates: &[&str]) -> FilePlan {
    let qsos = dates
        .iter()
        .map(|date| create_test_pota_qso(operator, park, date))
        .collect();
    FilePlan {
        park: park.to_string(),
        operator: operator.to_string(),
        earliest_date: dates.iter().min().unwrap().to_string(),
        qsos,
    }
}

#[tokio::test]
async fn test_write_single_file() {
    let temp_dir = TempDir::new().unwrap();
    let plan = create_test_plan("AJ6X", "K-1234", &["20240819", "20240820"]);

    let stats = write_plans(&[plan], temp_dir.path(), None).await.unwrap();

    assert_eq!(stats.files_written, 1);
    assert_eq!(stats.qsos_written, 2);

    let path = temp_dir.path().join("AJ6X@K-1234-20240819.adi");
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("ADIF SOTA to POTA conversion by sota2pota\n"));
    assert!(content.contains("<EOH>\n"));
    assert_eq!(content.matches("<EOR>\n").count(), 2);
    assert!(content.contains("<QSO_DATE:8>20240819"));
    assert!(content.contains("<QSO_DATE:8>20240820"));
}

#[tokio::test]
async fn test_write_creates_output_directory() {
    let temp_dir = TempDir::new().unwrap();
    let output_dir = temp_dir.path().join("out").join("logs");
    let plan = create_test_plan("AJ6X", "K-1234", &["20240819"]);

    write_plans(&[plan], &output_dir, None).await.unwrap();

    assert!(output_dir.join("AJ6X@K-1234-20240819.adi").exists());
}

#[tokio::test]
async fn test_write_multiple_files() {
    let temp_dir = TempDir::new().unwrap();
    let plans = vec![
        create_test_plan("AJ6X", "K-1234", &["20240819"]),
        create_test_plan("AJ6X", "K-5678", &["20240820"]),
    ];

    let stats = write_plans(&plans, temp_dir.path(), None).await.unwrap();

    assert_eq!(stats.files_written, 2);
    assert!(temp_dir.path().join("AJ6X@K-1234-20240819.adi").exists());
    assert!(temp_dir.path().join("AJ6X@K-5678-20240820.adi").exists());
    assert_eq!(stats.files.len(), 2);
    assert_eq!(stats.files[0].filename, "AJ6X@K-1234-20240819.adi");
    assert_eq!(stats.files[1].qso_count, 1);
}

#[tokio::test]
async fn test_write_overwrites_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("AJ6X@K-1234-20240819.adi");
    std::fs::write(&path, "stale content").unwrap();

    let plan = create_test_plan("AJ6X", "K-1234", &["20240819"]);
    write_plans(&[plan], temp_dir.path(), None).await.unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale content"));
    assert!(content.contains("<EOR>\n"));
}

#[tokio::test]
async fn test_write_nothing_for_empty_plans() {
    let temp_dir = TempDir::new().unwrap();

    let stats = write_plans(&[], temp_dir.path(), None).await.unwrap();

    assert_eq!(stats.files_written, 0);
    assert_eq!(stats.bytes_written, 0);
}

#[tokio::test]
async fn test_written_bytes_match_file_sizes() {
    let temp_dir = TempDir::new().unwrap();
    let plans = vec![
        create_test_plan("AJ6X", "K-1234", &["20240819"]),
        create_test_plan("AJ6X/P", "K-5678", &["20240820", "20240821"]),
    ];

    let stats = write_plans(&plans, temp_dir.path(), None).await.unwrap();

    let mut total = 0;
    for file in &stats.files {
        total += std::fs::metadata(temp_dir.path().join(&file.filename))
            .unwrap()
            .len() as usize;
    }
    assert_eq!(stats.bytes_written, total);
}
