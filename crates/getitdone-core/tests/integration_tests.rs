use chrono::NaiveDate;
use getitdone_core::error::CoreError;
use getitdone_core::models::{DateParseOutcome, NewTodoData, Schedule};
use getitdone_core::parser::{extract_trailing_date, parse_standalone_date};
use getitdone_core::schedule::{classify, schedule_order, SectionKind};
use getitdone_core::store::{JsonStore, TodoRepository};
use std::fs;
use tempfile::TempDir;

/// Helper function to create a store in a fresh temporary directory
fn setup_test_store() -> (JsonStore, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let store = JsonStore::open(temp_dir.path().join("todos.json"))
        .expect("Failed to open test store");
    (store, temp_dir)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Sunday
fn today() -> NaiveDate {
    date(2026, 10, 18)
}

/// Add a todo the way the interactive "add" flow does.
fn add_sentence(store: &mut JsonStore, sentence: &str) -> u32 {
    let extraction = extract_trailing_date(sentence, today());
    let schedule = extraction.outcome.into_schedule().unwrap_or_default();
    store
        .add(NewTodoData::new(extraction.text, schedule))
        .expect("Failed to add todo")
        .id
}

#[test]
fn test_sentence_to_schedule_workflow() {
    let (mut store, _temp_dir) = setup_test_store();

    let milk = add_sentence(&mut store, "buy milk tomorrow");
    let report = add_sentence(&mut store, "finish report asap");
    let mom = add_sentence(&mut store, "call mom on friday");
    let piano = add_sentence(&mut store, "learn piano bg");
    let book = add_sentence(&mut store, "read a book");

    assert_eq!(store.find(milk).unwrap().text, "buy milk");
    assert_eq!(store.find(mom).unwrap().due_date, Some(date(2026, 10, 23)));

    store.toggle(book).unwrap();

    let sections = classify(store.items(), today());
    let layout: Vec<(SectionKind, Vec<u32>)> = sections
        .iter()
        .map(|s| (s.kind, s.items.iter().map(|i| i.id).collect()))
        .collect();

    assert_eq!(
        layout,
        vec![
            (SectionKind::Asap, vec![report]),
            (SectionKind::Tomorrow, vec![milk]),
            (SectionKind::Future(date(2026, 10, 23)), vec![mom]),
            (SectionKind::Background, vec![piano]),
            (SectionKind::Completed, vec![book]),
        ]
    );

    let order: Vec<u32> = schedule_order(store.items(), today())
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(order, vec![report, milk, mom, piano, book]);
}

#[test]
fn test_mutations_survive_reopen() {
    let (mut store, temp_dir) = setup_test_store();
    let id = add_sentence(&mut store, "dentist on 2026-11-03");
    store.set_notes(id, Some("bring insurance card")).unwrap();
    store.log_time(id, 25).unwrap();
    store.toggle(id).unwrap();

    let reopened = JsonStore::open(temp_dir.path().join("todos.json")).unwrap();
    assert_eq!(reopened.items(), store.items());

    let item = reopened.find(id).unwrap();
    assert_eq!(item.due_date, Some(date(2026, 11, 3)));
    assert_eq!(item.notes.as_deref(), Some("bring insurance card"));
    assert_eq!(item.logged_minutes, 25);
    assert!(item.done);
    assert!(item.completed_at.is_some());
}

#[test]
fn test_persisted_format() {
    let (mut store, temp_dir) = setup_test_store();
    let id = add_sentence(&mut store, "pay rent +3d");
    store.set_asap(id, false).unwrap();

    let content = fs::read_to_string(temp_dir.path().join("todos.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    let item = &json[0];

    assert_eq!(item["id"], 1);
    assert_eq!(item["text"], "pay rent");
    assert_eq!(item["dueDate"], "2026-10-21");
    assert_eq!(item["isAsap"], false);
    assert_eq!(item["isBackground"], false);
    assert!(item["createdAt"].as_str().unwrap().starts_with("20"));
}

#[test]
fn test_loads_file_with_null_fields() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("todos.json");
    fs::write(
        &path,
        r#"[
  {
    "id": 4,
    "text": "legacy",
    "done": true,
    "dueDate": null,
    "isAsap": false,
    "isBackground": false,
    "createdAt": "2025-03-01T10:00:00.0000000+01:00",
    "completedAt": null,
    "loggedMinutes": 15,
    "notes": null
  },
  {
    "id": 9,
    "text": "with date",
    "dueDate": "2026-10-20",
    "createdAt": "2025-03-02T10:00:00Z"
  }
]"#,
    )
    .unwrap();

    let mut store = JsonStore::open(&path).unwrap();
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.find(9).unwrap().schedule(), Schedule::Due(date(2026, 10, 20)));

    let added = store.add(NewTodoData::new("next", Schedule::Asap)).unwrap();
    assert_eq!(added.id, 10);
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("todos.json");
    fs::write(&path, "not json {{{").unwrap();

    let result = JsonStore::open(&path);
    assert!(matches!(result, Err(CoreError::Json(_))));
}

#[test]
fn test_standalone_answers_drive_setters() {
    let (mut store, _temp_dir) = setup_test_store();
    let id = add_sentence(&mut store, "plan trip");

    for (answer, expected) in [
        ("next mon", Schedule::Due(date(2026, 10, 26))),
        ("asap", Schedule::Asap),
        ("bg", Schedule::Background),
        ("tmw", Schedule::Due(date(2026, 10, 19))),
        ("clear", Schedule::Unscheduled),
    ] {
        let outcome = parse_standalone_date(answer, today());
        let schedule = outcome.into_schedule().expect("answer should parse");
        let item = store.set_schedule(id, schedule).unwrap();
        assert_eq!(item.schedule(), expected, "answer {:?}", answer);
    }

    assert_eq!(parse_standalone_date("whenever", today()), DateParseOutcome::None);
}
