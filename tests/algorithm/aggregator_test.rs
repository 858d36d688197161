use noshow_stats::{AggregateResult, AnalysisKey, RecordParser, classify, merge, reduce};

use crate::utils::LineBuilder;

fn observations() -> Vec<AnalysisKey> {
    let parser = RecordParser::default();
    let lines = [
        LineBuilder::default().build(),
        LineBuilder {
            gender: "M",
            age: "8".to_string(),
            no_show: "Yes",
            ..Default::default()
        }
        .build(),
        LineBuilder {
            hypertension: "1",
            diabetes: "1",
            sms: "1",
            ..Default::default()
        }
        .build(),
        LineBuilder {
            appointment: "2016-05-10T00:00:00Z",
            no_show: "Yes",
            ..Default::default()
        }
        .build(),
    ];
    lines
        .iter()
        .flat_map(|line| classify(&parser.parse(line).unwrap()))
        .collect()
}

#[test]
fn test_partition_and_grouping_do_not_matter() {
    let keys = observations();
    let direct = AggregateResult::from_observations(keys.clone());

    for split in 1..keys.len() {
        let (head, tail) = keys.split_at(split);
        let head = AggregateResult::from_observations(head.to_vec());
        let tail = AggregateResult::from_observations(tail.to_vec());
        assert_eq!(merge(head.clone(), tail.clone()), direct);
        assert_eq!(merge(tail, head), direct);
    }
}

#[test]
fn test_combiner_applied_many_times() {
    let keys = observations();
    let direct = AggregateResult::from_observations(keys.clone());

    // Zero combiner passes: reduce every key's raw ones directly
    let mut unique: Vec<AnalysisKey> = keys.clone();
    unique.sort();
    unique.dedup();
    let reduced: AggregateResult = unique
        .into_iter()
        .map(|key| {
            let ones = keys.iter().filter(|k| **k == key).map(|_| 1);
            let total = reduce(&key, ones);
            (key, total)
        })
        .collect();
    assert_eq!(reduced, direct);

    // Two combiner passes over uneven partitions
    let first: Vec<AggregateResult> = keys
        .chunks(3)
        .map(|chunk| AggregateResult::from_observations(chunk.to_vec()))
        .collect();
    let second: Vec<AggregateResult> = first
        .chunks(2)
        .map(|chunk| chunk.iter().cloned().fold(AggregateResult::new(), merge))
        .collect();
    let final_result = second.into_iter().fold(AggregateResult::new(), merge);
    assert_eq!(final_result, direct);
}

#[test]
fn test_totals_by_key() {
    let result = AggregateResult::from_observations(observations());
    assert_eq!(result.get_str("Gender_F_Attended"), 2);
    assert_eq!(result.get_str("Gender_F_NoShow"), 1);
    assert_eq!(result.get_str("Gender_M_NoShow"), 1);
    assert_eq!(result.get_str("AgeGroup_CHILDREN_YOUTH_NoShow"), 1);
    assert_eq!(result.get_str("Health_MultipleDiseases_2_Attended"), 1);
    assert_eq!(result.get_str("LeadTime_LONG_NoShow"), 1);
    assert_eq!(result.get_str("LeadTime_SAME_DAY_Attended"), 2);
}
