use crate::events::describe_record;

use super::models::EventRecord;

fn sample_records() -> Vec<EventRecord> {
    let events_str = include_str!("./events_sample.json");
    serde_json::from_str(events_str).expect("should deserialize")
}

#[test]
fn test_parse_events_sample() {
    let records = sample_records();

    assert_eq!(records.len(), 7);
    assert_eq!(records[1].event_type, "WatchEvent");
    assert_eq!(records[2].repo_name(), "octocat/Spoon-Knife");
}

#[test]
fn test_describe_events_sample() {
    let lines: Vec<String> = sample_records()
        .iter()
        .filter_map(|r| describe_record(r).expect("should describe"))
        .collect();

    pretty_assertions::assert_eq!(
        lines,
        vec![
            "Pushed 1 commit to octocat/Hello-World",
            "Created new branch octocat/Spoon-Knife",
            "Issue 1347. Found a bug for octocat/Hello-World is opened",
            "Pull request 1348. Amazing new feature for octocat/Hello-World is closed (https://github.com/octocat/Hello-World/pull/1348)",
            "Deleted tag octocat/Spoon-Knife",
            "ReleaseEvent: octocat/Spoon-Knife",
        ]
    );
}
