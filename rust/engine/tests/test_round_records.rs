use std::fs;
use std::path::PathBuf;

use fivedraw_engine::cards::{Card, Face as F, Suit as S};
use fivedraw_engine::logger::{PlayerSummary, RoundLogger, RoundRecord};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn sample_record(round_id: &str) -> RoundRecord {
    RoundRecord {
        round_id: round_id.to_string(),
        seed: Some(42),
        players: vec![PlayerSummary {
            name: "Player 1".to_string(),
            cards: vec![Card::new(F::Ace, S::Spades)],
            rank: "High Card".to_string(),
        }],
        winners: vec![0],
        winning_rank: Some("High Card".to_string()),
        ts: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("roundlog");
    let mut logger = RoundLogger::create(&path).expect("create logger");
    logger.write(&sample_record("20250102-000001")).expect("write");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn sequential_ids_increment() {
    let mut logger = RoundLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("roundlog_ts");
    let mut logger = RoundLogger::create(&path).expect("create logger");

    logger.write(&sample_record("20250102-000001")).expect("write");
    let mut with_ts = sample_record("20250102-000002");
    with_ts.ts = Some("2025-01-02T03:04:05Z".to_string());
    logger.write(&with_ts).expect("write");

    let contents = fs::read_to_string(&path).expect("read file");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: RoundRecord = serde_json::from_str(lines[0]).expect("parse");
    assert!(first.ts.is_some(), "logger should inject a timestamp");

    let second: RoundRecord = serde_json::from_str(lines[1]).expect("parse");
    assert_eq!(second.ts.as_deref(), Some("2025-01-02T03:04:05Z"));
}

#[test]
fn record_round_trips_through_serde() {
    let record = RoundRecord {
        round_id: "20250601-000007".to_string(),
        seed: None,
        players: vec![
            PlayerSummary {
                name: "Player 1".to_string(),
                cards: vec![
                    Card::new(F::King, S::Hearts),
                    Card::new(F::King, S::Spades),
                ],
                rank: "Pair".to_string(),
            },
            PlayerSummary {
                name: "Player 2".to_string(),
                cards: vec![Card::new(F::Two, S::Diamonds)],
                rank: "High Card".to_string(),
            },
        ],
        winners: vec![0],
        winning_rank: Some("Pair".to_string()),
        ts: Some("2025-06-01T00:00:00Z".to_string()),
    };

    let json = serde_json::to_string(&record).expect("serialize");
    let parsed: RoundRecord = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, record);
}
