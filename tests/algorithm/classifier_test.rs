use noshow_stats::{RecordError, RecordParser, classify, try_classify};

use crate::utils::{CENTRO_LINE, HEADER, LineBuilder};

fn classify_line(line: &str) -> Vec<String> {
    let record = RecordParser::default().parse(line).unwrap();
    let mut keys: Vec<String> = classify(&record).iter().map(ToString::to_string).collect();
    keys.sort();
    keys
}

#[test]
fn test_end_to_end_scenario() {
    let keys = classify_line(CENTRO_LINE);
    assert_eq!(
        keys,
        vec![
            "AgeGroup_YOUNG_ADULTS_Attended",
            "DetailedAgeDecade_30-39_Attended",
            "Gender_F_Attended",
            "Health_Healthy_Attended",
            "LeadTime_SHORT_Attended",
            "Neighbourhood_Centro_Attended",
            "Sms_SMS_RECEIVED_Attended",
        ]
    );
}

#[test]
fn test_time_of_day_is_ignored() {
    // Scheduled in the evening, appointment at midnight of the same date
    let keys = classify_line(&LineBuilder::default().build());
    assert!(keys.contains(&"LeadTime_SAME_DAY_Attended".to_string()));
    assert!(keys.contains(&"AgeGroup_SENIORS_Attended".to_string()));
    assert!(keys.contains(&"DetailedAgeDecade_60-69_Attended".to_string()));
    assert!(keys.contains(&"Neighbourhood_JARDIM DA PENHA_Attended".to_string()));
    assert!(keys.contains(&"Sms_NO_SMS_Attended".to_string()));
}

#[test]
fn test_no_show_outcome_on_every_key() {
    let line = LineBuilder {
        no_show: "Yes",
        ..Default::default()
    }
    .build();
    let keys = classify_line(&line);
    assert_eq!(keys.len(), 7);
    assert!(keys.iter().all(|key| key.ends_with("_NoShow")));
}

#[test]
fn test_lead_time_categories() {
    let cases = [
        ("2016-04-29", "SAME_DAY"),
        ("2016-05-02", "SHORT"),
        ("2016-05-06", "MEDIUM"),
        ("2016-05-29", "LONG"),
        ("2016-07-28", "VERY_LONG"),
        ("2016-07-29", "EXTREMELY_LONG"),
    ];
    for (appointment, category) in cases {
        let line = LineBuilder {
            scheduled: "2016-04-29",
            appointment,
            ..Default::default()
        }
        .build();
        let expected = format!("LeadTime_{category}_Attended");
        assert!(
            classify_line(&line).contains(&expected),
            "{appointment} should be {category}"
        );
    }
}

#[test]
fn test_negative_lead_time_yields_nothing() {
    let line = LineBuilder {
        scheduled: "2016-05-02T08:00:00Z",
        appointment: "2016-04-29T00:00:00Z",
        hypertension: "1",
        ..Default::default()
    }
    .build();
    let record = RecordParser::default().parse(&line).unwrap();
    assert!(classify(&record).is_empty());
    assert_eq!(
        try_classify(&record),
        Err(RecordError::InvalidLeadTime { days: -3 })
    );
}

#[test]
fn test_multiple_diseases() {
    let line = LineBuilder {
        hypertension: "1",
        diabetes: "1",
        ..Default::default()
    }
    .build();
    let keys = classify_line(&line);
    assert!(keys.contains(&"Health_MultipleDiseases_2_Attended".to_string()));
    assert!(!keys.contains(&"Health_Healthy_Attended".to_string()));

    let line = LineBuilder {
        alcoholism: "1",
        diabetes: "1",
        handicap: "2",
        ..Default::default()
    }
    .build();
    let keys = classify_line(&line);
    assert!(keys.contains(&"Health_MultipleDiseases_3_Attended".to_string()));
    assert!(keys.contains(&"Health_Handicap_Attended".to_string()));
}

#[test]
fn test_null_neighbourhood_not_emitted() {
    let line = LineBuilder {
        neighbourhood: "NULL",
        ..Default::default()
    }
    .build();
    let keys = classify_line(&line);
    assert_eq!(keys.len(), 6);
    assert!(!keys.iter().any(|key| key.starts_with("Neighbourhood_")));
}

#[test]
fn test_rejections() {
    let parser = RecordParser::default();
    assert_eq!(parser.parse(HEADER), Err(RecordError::HeaderLine));

    let line = LineBuilder {
        age: "abc".to_string(),
        ..Default::default()
    }
    .build();
    let err = parser.parse(&line).unwrap_err();
    assert!(matches!(err, RecordError::InvalidAge { .. }));
    assert!(!err.is_malformed());

    let line = LineBuilder {
        appointment: "29/04/2016",
        ..Default::default()
    }
    .build();
    assert!(parser.parse(&line).unwrap_err().is_malformed());
}
