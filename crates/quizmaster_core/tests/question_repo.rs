use quizmaster_core::{InMemoryQuestionRepository, Question, QuestionRepository, RepoError};
use std::thread;

fn seeded_repo() -> InMemoryQuestionRepository {
    let repo = InMemoryQuestionRepository::new();
    repo.create_question(&Question::new(1, "How many letters in \"Quipper\"?", "7"))
        .unwrap();
    repo.create_question(&Question::new(2, "Capital of France?", "Paris"))
        .unwrap();
    repo.create_question(&Question::new(3, "Guess 1, 2, 3 or 4?", "4"))
        .unwrap();
    repo
}

#[test]
fn create_and_get_roundtrip() {
    let repo = InMemoryQuestionRepository::new();
    let question = Question::new(10, "Who am I?", "me");
    repo.create_question(&question).unwrap();

    assert_eq!(repo.get_question(10).unwrap(), question);
}

#[test]
fn get_missing_returns_not_found() {
    let repo = seeded_repo();
    assert_eq!(repo.get_question(42).unwrap_err(), RepoError::NotFound(42));
}

#[test]
fn list_empty_store_is_empty_not_error() {
    let repo = InMemoryQuestionRepository::new();
    assert!(repo.list_questions().unwrap().is_empty());
}

#[test]
fn list_preserves_insertion_order() {
    let repo = InMemoryQuestionRepository::new();
    for id in [5, 1, 3] {
        repo.create_question(&Question::new(id, format!("q{id}"), "a"))
            .unwrap();
    }

    let ids: Vec<_> = repo.list_questions().unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![5, 1, 3]);
}

#[test]
fn create_duplicate_fails_without_mutation() {
    let repo = seeded_repo();
    let before = repo.list_questions().unwrap();

    let err = repo
        .create_question(&Question::new(2, "Replaced?", "no"))
        .unwrap_err();
    assert_eq!(err, RepoError::AlreadyExists(2));
    assert_eq!(err.to_string(), "question already exists");
    assert_eq!(repo.list_questions().unwrap(), before);
}

#[test]
fn update_replaces_in_place() {
    let repo = seeded_repo();
    let updated = Question::new(2, "Capital of Italy?", "Rome");
    repo.update_question(&updated).unwrap();

    let all = repo.list_questions().unwrap();
    assert_eq!(all[1], updated);
    assert_eq!(all.len(), 3);
}

#[test]
fn update_missing_returns_not_found_without_mutation() {
    let repo = seeded_repo();
    let before = repo.list_questions().unwrap();

    let err = repo
        .update_question(&Question::new(9, "Nope", "nope"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(9)));
    assert_eq!(err.to_string(), "question not found");
    assert_eq!(repo.list_questions().unwrap(), before);
}

#[test]
fn delete_keeps_relative_order_of_remaining_records() {
    let repo = seeded_repo();
    repo.delete_question(2).unwrap();

    let ids: Vec<_> = repo.list_questions().unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(repo.get_question(2).unwrap_err(), RepoError::NotFound(2));
}

#[test]
fn delete_missing_returns_not_found_without_mutation() {
    let repo = seeded_repo();
    let before = repo.list_questions().unwrap();

    assert_eq!(repo.delete_question(7).unwrap_err(), RepoError::NotFound(7));
    assert_eq!(repo.list_questions().unwrap(), before);
}

#[test]
fn returned_records_are_copies() {
    let repo = seeded_repo();
    let mut loaded = repo.get_question(1).unwrap();
    loaded.answer = "8".to_string();

    assert_eq!(repo.get_question(1).unwrap().answer, "7");
}

#[test]
fn concurrent_creates_with_same_id_admit_exactly_one() {
    let repo = InMemoryQuestionRepository::new();

    let successes = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|n| {
                let repo = &repo;
                scope.spawn(move || {
                    repo.create_question(&Question::new(1, format!("racer {n}"), "a"))
                        .is_ok()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|created| *created)
            .count()
    });

    assert_eq!(successes, 1);
    assert_eq!(repo.list_questions().unwrap().len(), 1);
}

#[test]
fn concurrent_readers_and_writers_keep_ids_unique() {
    let repo = InMemoryQuestionRepository::new();

    thread::scope(|scope| {
        for worker in 0..4 {
            let repo = &repo;
            scope.spawn(move || {
                for id in 0..50 {
                    let _ = repo.create_question(&Question::new(id, format!("w{worker}"), "a"));
                    let _ = repo.get_question(id);
                    let _ = repo.list_questions();
                }
            });
        }
    });

    let mut ids: Vec<_> = repo.list_questions().unwrap().iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 50);
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}

#[test]
fn question_serializes_with_field_names() {
    let question = Question::new(1, "Q?", "7");
    let json = serde_json::to_value(&question).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "id": 1, "question": "Q?", "answer": "7" })
    );
}
