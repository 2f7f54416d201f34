//! End-to-end review flow: import, queue, review, persist, rebuild.

use vocab_core::srs::HOUR_MS;
use vocab_core::{
    parse_import, ArticleContext, EpochMillis, Library, MasteryLevel, NextReview, Outcome,
    Progress, ProgressStore, ProgressSummary, ReviewSession, SessionEvent, SessionState,
    SnapshotDb, Word,
};

const T: EpochMillis = 1_700_000_000_000;

const IMPORT: &str = "\
# Trade talks resume
生成时间：2024-06-01
Negotiators discussed a tariff and a levy on steel.
单词清单：
• tariff - 关税
• levy - 征税
==========
# Rail fares
生成时间：2024-06-02
A new toll on the bridge.
单词清单：
• toll - 通行费
• levy - 税款
";

fn known_progress(level: MasteryLevel, next: NextReview) -> Progress {
    Progress {
        level,
        next_review: next,
        last_review: T - 2 * HOUR_MS,
    }
}

#[test]
fn queue_scenario_due_before_new_excluding_graduated_and_future() {
    let catalog = vec![
        Word::new("A", "a", "x"),
        Word::new("B", "b", "x"),
        Word::new("C", "c", "x"),
        Word::new("D", "d", "x"),
    ];
    let store = ProgressStore::new()
        .with_progress(
            "B",
            known_progress(MasteryLevel::Learning2, NextReview::DueAt(T - HOUR_MS)),
        )
        .with_progress("C", known_progress(MasteryLevel::Graduated, NextReview::Graduated))
        .with_progress(
            "D",
            known_progress(MasteryLevel::Learning1, NextReview::DueAt(T + HOUR_MS)),
        );

    let queue: Vec<&str> = vocab_core::build_queue(&catalog, &store, T)
        .iter()
        .map(|w| w.id.as_str())
        .collect();
    assert_eq!(queue, vec!["B", "A"]);
}

#[test]
fn review_scenarios_through_session() {
    let catalog = vec![Word::new("A", "a", "x")];

    // Never reviewed, answered known.
    let mut session = ReviewSession::new();
    session.ensure_queue(&catalog, &ProgressStore::new(), T);
    let receipt = session.review(&ProgressStore::new(), Outcome::Known, T).unwrap();
    assert_eq!(
        receipt.store.get("A"),
        Some(&Progress {
            level: MasteryLevel::Learning1,
            next_review: NextReview::DueAt(T + 360_000),
            last_review: T,
        })
    );

    // Explicit level 0 behaves the same.
    let zero = ProgressStore::new().with_progress(
        "A",
        known_progress(MasteryLevel::New, NextReview::DueAt(0)),
    );
    let mut session = ReviewSession::new();
    session.ensure_queue(&catalog, &zero, T);
    let again = session.review(&zero, Outcome::Known, T).unwrap();
    assert_eq!(again.store.get("A"), receipt.store.get("A"));

    // Level 2 answered unknown is reset to 1, not 0.
    let two = ProgressStore::new().with_progress(
        "A",
        known_progress(MasteryLevel::Learning2, NextReview::DueAt(T - 1)),
    );
    let mut session = ReviewSession::new();
    session.ensure_queue(&catalog, &two, T);
    let reset = session.review(&two, Outcome::Unknown, T).unwrap();
    assert_eq!(
        reset.store.get("A"),
        Some(&Progress {
            level: MasteryLevel::Learning1,
            next_review: NextReview::DueAt(T + 360_000),
            last_review: T,
        })
    );
}

#[test]
fn import_review_persist_and_resume() {
    let db = SnapshotDb::open_memory().unwrap();
    let batch = parse_import(IMPORT).unwrap();
    let library = Library::default().replace_catalog(batch, true);
    db.save_library(&library).unwrap();

    // "levy" appears twice in the catalog and is queued twice.
    let mut session = db.load_session().unwrap();
    let built = session.ensure_queue(&library.words, &library.progress, T);
    assert_eq!(built, Some(SessionEvent::QueueBuilt { due: 0, new: 4, at: T }));
    db.save_session(&session).unwrap();

    // Next invocation picks up where we left off.
    let mut library = db.load_library().unwrap().unwrap();
    let mut session = db.load_session().unwrap();
    assert_eq!(session.position(), Some((1, 4)));
    assert_eq!(session.current().unwrap().id, "tariff");

    let ctx = ArticleContext::for_word(&library, session.current().unwrap()).unwrap();
    assert_eq!(ctx.title, "Trade talks resume");
    assert_eq!(ctx.match_count(), 1);

    let mut store = library.progress.clone();
    for outcome in [Outcome::Known, Outcome::Unknown, Outcome::Known, Outcome::Known] {
        let receipt = session.review(&store, outcome, T).unwrap();
        store = receipt.store;
    }
    assert_eq!(session.state(), SessionState::Empty);

    // Second "levy" review climbed from level 1 to 2.
    assert_eq!(store.get("levy").unwrap().level, MasteryLevel::Learning2);
    assert_eq!(store.get("tariff").unwrap().level, MasteryLevel::Learning1);

    library = library.with_progress(store);
    db.save_library(&library).unwrap();
    db.save_session(&session).unwrap();

    let summary = ProgressSummary::compute(&library.words, &library.progress, T + 1);
    assert_eq!(summary.queued(), 0);
    assert_eq!(summary.next_due, Some(T + 360_000));

    // Six minutes on, tariff and toll are due; levy waits an hour.
    let mut session = db.load_session().unwrap();
    let later = T + 360_000;
    session.ensure_queue(&library.words, &library.progress, later);
    let ids: Vec<&str> = session.remaining().iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, vec!["tariff", "toll"]);
}

#[test]
fn reimport_keeps_or_drops_progress() {
    let batch = parse_import(IMPORT).unwrap();
    let progressed = Library::default()
        .replace_catalog(batch.clone(), true)
        .with_progress(ProgressStore::new().with_progress(
            "toll",
            known_progress(MasteryLevel::Learning3, NextReview::DueAt(T)),
        ));

    let kept = progressed.replace_catalog(batch.clone(), true);
    assert!(kept.progress.contains("toll"));

    let dropped = progressed.replace_catalog(batch, false);
    assert!(dropped.progress.is_empty());
}

#[test]
fn browser_snapshot_restores() {
    let json = r##"{
        "articles": [{"id": "k3j", "title": "# T", "date": "2024", "content": "tariff"}],
        "words": [
            {"id": "tariff", "translation": "关税", "articleId": "k3j"},
            {"id": "levy", "translation": "征税", "articleId": "k3j"}
        ],
        "progress": {
            "tariff": {"level": 4, "nextReview": 9007199254740991, "lastReview": 1700000000000},
            "levy": {"level": 2, "nextReview": 1700000000000, "lastReview": 1699990000000}
        }
    }"##;
    let library: Library = serde_json::from_str(json).unwrap();
    assert_eq!(
        library.progress.get("tariff").unwrap().next_review,
        NextReview::Graduated
    );

    let queue = vocab_core::build_queue(&library.words, &library.progress, T);
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0].id, "levy");
}
