use noshow_stats::{
    AnalysisConfig, AtomicRecordCounter, RecordCounter, RecordParser, process_line, run_lines,
};

use crate::utils::{CENTRO_LINE, HEADER, LineBuilder, test_config};

#[test]
fn test_malformed_rows_do_not_stop_the_run() {
    let lines = vec![
        HEADER.to_string(),
        CENTRO_LINE.to_string(),
        "1,10,F,2023-01-01".to_string(),
        LineBuilder {
            scheduled: "not a date",
            ..Default::default()
        }
        .build(),
        LineBuilder {
            age: "abc".to_string(),
            ..Default::default()
        }
        .build(),
        CENTRO_LINE.to_string(),
    ];

    let counter = AtomicRecordCounter::malformed();
    let result = run_lines(&lines, &test_config(), &counter).unwrap();

    assert_eq!(counter.value(), 2);
    assert_eq!(result.get_str("Gender_F_Attended"), 2);
    assert_eq!(result.get_str("Neighbourhood_Centro_Attended"), 2);
    assert_eq!(result.total_observations(), 14);
}

#[test]
fn test_empty_flag_fields_still_classify() {
    let lines = vec![
        LineBuilder {
            sms: "",
            ..Default::default()
        }
        .build(),
        LineBuilder {
            hypertension: "",
            ..Default::default()
        }
        .build(),
        LineBuilder {
            handicap: "",
            ..Default::default()
        }
        .build(),
    ];

    let counter = AtomicRecordCounter::malformed();
    let result = run_lines(&lines, &test_config(), &counter).unwrap();

    assert_eq!(counter.value(), 0);
    assert_eq!(result.total_observations(), 21);
    assert_eq!(result.get_str("Sms_NO_SMS_Attended"), 3);
    assert_eq!(result.get_str("Health_Healthy_Attended"), 3);
    assert_eq!(result.get_str("Health_Hypertension_Attended"), 0);
}

#[test]
fn test_invalid_age_is_silent() {
    let counter = AtomicRecordCounter::malformed();
    let line = LineBuilder {
        age: "abc".to_string(),
        ..Default::default()
    }
    .build();
    assert!(process_line(&RecordParser::default(), &line, &counter).is_empty());
    assert_eq!(counter.value(), 0);
}

#[test]
fn test_results_independent_of_chunking() {
    let lines: Vec<String> = (0..200)
        .map(|i| {
            LineBuilder {
                gender: if i % 3 == 0 { "M" } else { "F" },
                age: (i % 100).to_string(),
                no_show: if i % 4 == 0 { "Yes" } else { "No" },
                hypertension: if i % 7 == 0 { "1" } else { "0" },
                ..Default::default()
            }
            .build()
        })
        .collect();

    let counter = AtomicRecordCounter::malformed();
    let baseline = run_lines(
        &lines,
        &AnalysisConfig {
            chunk_size: lines.len(),
            ..test_config()
        },
        &counter,
    )
    .unwrap();

    for chunk_size in [1, 3, 16, 64] {
        for use_combiner in [true, false] {
            let config = AnalysisConfig {
                chunk_size,
                use_combiner,
                ..test_config()
            };
            assert_eq!(run_lines(&lines, &config, &counter).unwrap(), baseline);
        }
    }
    assert_eq!(baseline.get_str("Gender_M_NoShow"), 17);
    assert_eq!(counter.value(), 0);
}

#[test]
fn test_invalid_config_rejected() {
    let counter = AtomicRecordCounter::malformed();
    let config = AnalysisConfig {
        chunk_size: 0,
        ..test_config()
    };
    assert!(run_lines(&[CENTRO_LINE], &config, &counter).is_err());
}
