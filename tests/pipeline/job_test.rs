use std::fs;

use noshow_stats::results::{RESULT_FILE_NAME, SUCCESS_MARKER, SUMMARY_FILE_NAME};
use noshow_stats::{AnalysisError, Dimension, read_results, run_job};

use crate::utils::{CENTRO_LINE, LineBuilder, test_config, write_input};

#[tokio::test]
async fn test_job_writes_totals_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("raw_data");
    fs::create_dir(&input_dir).unwrap();

    write_input(
        &input_dir,
        "part-0.csv",
        &[
            CENTRO_LINE.to_string(),
            LineBuilder {
                no_show: "Yes",
                ..Default::default()
            }
            .build(),
        ],
    );
    write_input(
        &input_dir,
        "part-1.csv",
        &[
            CENTRO_LINE.to_string(),
            "broken,line".to_string(),
        ],
    );
    fs::write(input_dir.join("_SUCCESS"), "").unwrap();

    let output = dir.path().join("results");
    let report = run_job(&input_dir, &output, &test_config()).await.unwrap();

    assert_eq!(report.input_files, 2);
    assert_eq!(report.lines_read, 6);
    assert_eq!(report.classified_records, 3);
    assert_eq!(report.malformed_records, 1);
    assert!(report.to_string().contains("Malformed Records: 1"));

    assert!(output.join(SUCCESS_MARKER).exists());
    assert_eq!(report.output_file, output.join(RESULT_FILE_NAME));

    let totals = read_results(&output).unwrap();
    assert_eq!(totals.len(), report.distinct_keys);
    assert_eq!(totals.get_str("Neighbourhood_Centro_Attended"), 2);
    assert_eq!(totals.get_str("Neighbourhood_JARDIM DA PENHA_NoShow"), 1);
    assert_eq!(totals.get_str("Sms_SMS_RECEIVED_Attended"), 2);

    let gender = report.summary.dimension(Dimension::Gender).unwrap();
    let female = gender.row("F").unwrap();
    assert_eq!(female.attended, 2);
    assert_eq!(female.no_show, 1);

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output.join(SUMMARY_FILE_NAME)).unwrap())
            .unwrap();
    assert_eq!(summary["overall"]["total"], 3);
}

#[tokio::test]
async fn test_job_refuses_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "input.csv", &[CENTRO_LINE.to_string()]);

    let result = run_job(&input, dir.path(), &test_config()).await;
    assert!(matches!(result, Err(AnalysisError::OutputExists(_))));
}

#[tokio::test]
async fn test_job_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let result = run_job(
        &dir.path().join("missing.csv"),
        &dir.path().join("out"),
        &test_config(),
    )
    .await;
    assert!(matches!(result, Err(AnalysisError::InputNotFound(_))));
    assert!(!dir.path().join("out").exists());
}
