use std::fs;
use std::path::PathBuf;

use guessing::{Difficulty, GameError, HighScore, ScoreTable};
use proptest::prelude::*;

fn temp_score_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "guessing-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn test_update_high_score() {
    let mut table = ScoreTable::new();
    for d in Difficulty::ALL {
        assert!(table.update(d, 100, "Adam"));
        assert_eq!(table.get(d), Some(&HighScore("Adam".into(), 100)));

        assert!(table.update(d, 123, "Jola"));
        assert_eq!(table.get(d), Some(&HighScore("Jola".into(), 123)));

        assert!(!table.update(d, 80, "Adam"));
        assert_eq!(table.get(d), Some(&HighScore("Jola".into(), 123)));
    }
}

#[test]
fn test_lower_score_rejected_then_higher_accepted() {
    let mut table = ScoreTable::new();
    table.update(Difficulty::Easy, 100, "Adam");
    table.update(Difficulty::Easy, 80, "Jola");
    assert_eq!(table.get(Difficulty::Easy), Some(&HighScore("Adam".into(), 100)));
    table.update(Difficulty::Easy, 150, "Jola");
    assert_eq!(table.get(Difficulty::Easy), Some(&HighScore("Jola".into(), 150)));
}

#[test]
fn test_tie_keeps_existing_holder() {
    let mut table = ScoreTable::new();
    table.update(Difficulty::Medium, 100, "Adam");
    assert!(!table.update(Difficulty::Medium, 100, "Jola"));
    assert_eq!(table.get(Difficulty::Medium).unwrap().name(), "Adam");
}

#[test]
fn test_first_zero_score_is_recorded() {
    let mut table = ScoreTable::new();
    assert!(table.update(Difficulty::Hard, 0, "Slow"));
    assert_eq!(table.get(Difficulty::Hard).unwrap().score(), 0);
}

#[test]
fn test_display_lines() {
    let mut table = ScoreTable::new();
    table.update(Difficulty::Easy, 100, "Adam");
    table.update(Difficulty::Medium, 120, "Jola");
    table.update(Difficulty::Hard, 130, "Bartek");
    assert_eq!(
        table.display_lines(),
        vec!["Easy: Adam - 100", "Medium: Jola - 120", "Hard: Bartek - 130"]
    );
}

#[test]
fn test_save_writes_name_score_pairs() {
    let path = temp_score_file("save-format");
    let mut table = ScoreTable::new();
    table.update(Difficulty::Easy, 100, "Adam");
    table.save(&path).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"easy": ["Adam", 100]}));
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_then_load_roundtrip() {
    let path = temp_score_file("roundtrip");
    let mut table = ScoreTable::new();
    table.update(Difficulty::Easy, 100, "Adam");
    table.update(Difficulty::Hard, 2695, "Jola");
    table.save(&path).unwrap();

    let loaded = ScoreTable::load(&path).unwrap();
    assert_eq!(loaded, table);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_overwrites_previous_content() {
    let path = temp_score_file("overwrite");
    let mut first = ScoreTable::new();
    first.update(Difficulty::Easy, 100, "Adam");
    first.update(Difficulty::Medium, 50, "Adam");
    first.save(&path).unwrap();

    let mut second = ScoreTable::new();
    second.update(Difficulty::Hard, 10, "Jola");
    second.save(&path).unwrap();

    assert_eq!(ScoreTable::load(&path).unwrap(), second);
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_missing_file_is_empty() {
    let path = temp_score_file("missing");
    let table = ScoreTable::load(&path).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_load_corrupt_file() {
    let path = temp_score_file("corrupt");
    fs::write(&path, "{\"easy\": [\"Adam\", 100], \"hard\": oops").unwrap();
    let err = ScoreTable::load(&path).unwrap_err();
    assert!(matches!(err, GameError::PersistenceCorrupt { .. }));

    let (table, warning) = ScoreTable::load_or_reset(&path);
    assert!(table.is_empty());
    assert!(warning.is_some());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_wrong_shape_is_not_partially_applied() {
    let path = temp_score_file("wrong-shape");
    fs::write(&path, r#"{"easy": ["Adam", 100], "nightmare": ["Jola", 5]}"#).unwrap();
    let (table, warning) = ScoreTable::load_or_reset(&path);
    assert!(table.is_empty());
    assert!(matches!(warning, Some(GameError::PersistenceCorrupt { .. })));

    fs::write(&path, r#"{"easy": {"name": "Adam", "score": 100}}"#).unwrap();
    let (table, warning) = ScoreTable::load_or_reset(&path);
    assert!(table.is_empty());
    assert!(warning.is_some());
    fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_failure_is_reported() {
    let path = std::env::temp_dir()
        .join("guessing-no-such-dir")
        .join("nested")
        .join("scores.json");
    let table = ScoreTable::new();
    let err = table.save(&path).unwrap_err();
    assert!(matches!(err, GameError::PersistenceWriteFailure { .. }));
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn update_is_idempotent(
        d in difficulty_strategy(),
        score in any::<u64>(),
        name in "[A-Za-z]{1,12}",
    ) {
        let mut table = ScoreTable::new();
        table.update(d, score, &name);
        let once = table.clone();
        prop_assert!(!table.update(d, score, &name));
        prop_assert_eq!(table, once);
    }

    #[test]
    fn table_json_roundtrip(
        updates in proptest::collection::vec(
            (difficulty_strategy(), 0u64..10_000, "[A-Za-z ]{1,12}"),
            0..12,
        ),
    ) {
        let mut table = ScoreTable::new();
        for (d, score, name) in &updates {
            table.update(*d, *score, name);
        }
        let json = serde_json::to_string(&table).unwrap();
        let decoded: ScoreTable = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, table);
    }
}
