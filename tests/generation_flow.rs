use std::sync::Arc;
use std::time::Duration;

use career_roadmap::app::{Action, App};
use career_roadmap::generation::DEFAULT_DELAY_MS;
use career_roadmap::roadmap::ADVICE;
use career_roadmap::{
    Field, FormData, GenerationStatus, RoadmapError, Session, SimulatedGenerator, Trigger,
};
use tokio::time::Instant;

fn generator() -> SimulatedGenerator {
    SimulatedGenerator::new(Duration::from_millis(DEFAULT_DELAY_MS))
}

#[tokio::test(start_paused = true)]
async fn test_concrete_roadmap_after_delay() {
    let mut session = Session::with_form(FormData::new(
        "3",
        "Java, Spring, MySQL",
        "Senior Backend Engineer",
    ));

    let started = Instant::now();
    let roadmap = session
        .generate_with(&generator())
        .await
        .expect("valid form")
        .expect("trigger enabled");

    assert!(started.elapsed() >= Duration::from_millis(DEFAULT_DELAY_MS));
    assert!(roadmap.starts_with(
        "Roadmap generated for a 3-year Java, Spring, MySQL Developer targeting Senior Backend Engineer:"
    ));
    let bullets: Vec<&str> = roadmap
        .lines()
        .filter_map(|l| l.strip_prefix("• "))
        .collect();
    assert_eq!(bullets, ADVICE.to_vec());
    assert_eq!(session.status(), GenerationStatus::Idle);
    assert_eq!(session.roadmap(), roadmap);
}

#[tokio::test(start_paused = true)]
async fn test_missing_experience_is_rejected() {
    let mut session = Session::with_form(FormData::new("", "Python", "ML Engineer"));

    let result = session.generate_with(&generator()).await;

    assert!(matches!(result, Err(RoadmapError::Validation { .. })));
    assert_eq!(session.roadmap(), "");
    assert_eq!(session.status(), GenerationStatus::Idle);
    assert!(session.alert().is_some());
}

#[tokio::test(start_paused = true)]
async fn test_messy_skills_are_normalized() {
    let mut session = Session::with_form(FormData::new("7", " Java ,  Spring ,MySQL ", "CTO"));
    let roadmap = session.generate_with(&generator()).await.unwrap().unwrap();
    assert!(roadmap.contains("7-year Java, Spring, MySQL Developer"));
}

#[tokio::test(start_paused = true)]
async fn test_every_non_empty_triple_completes() {
    let cases = [
        ("0", "x", "y"),
        (" ", " ", " "),
        ("12", "Rust,,Go", "Principal Engineer"),
        ("1.5", "SQL", "Data Analyst"),
    ];
    for (e, s, t) in cases {
        let mut session = Session::with_form(FormData::new(e, s, t));
        let Trigger::Started(ticket) = session.request_generation().unwrap() else {
            panic!("trigger should be enabled for {e:?}/{s:?}/{t:?}");
        };
        assert_eq!(session.status(), GenerationStatus::InProgress);

        let text = career_roadmap::RoadmapGenerator::generate(&generator(), ticket.form).await;
        assert!(session.complete(ticket.id, text));
        assert_eq!(session.status(), GenerationStatus::Idle);
        assert!(session.has_roadmap());
    }
}

#[tokio::test(start_paused = true)]
async fn test_each_empty_field_blocks_generation() {
    for field in Field::ALL {
        let mut session = Session::with_form(FormData::new("3", "Go", "SRE"));
        session.update(field, "");
        let err = session.request_generation().unwrap_err();
        match err {
            RoadmapError::Validation { missing } => assert_eq!(missing, vec![field]),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(session.status(), GenerationStatus::Idle);
        assert!(!session.has_roadmap());
    }
}

#[tokio::test(start_paused = true)]
async fn test_app_disables_trigger_while_generating() {
    let mut app = App::new(Arc::new(generator()), "test");
    for (i, text) in ["3", "Java", "Lead"].into_iter().enumerate() {
        if i > 0 {
            app.handle(Action::FocusNext);
        }
        for c in text.chars() {
            app.handle(Action::Type(c));
        }
    }

    app.handle(Action::Submit);
    assert!(!app.session().trigger_enabled());

    // Second press while busy must not start another generation
    app.handle(Action::Submit);
    tokio::time::sleep(Duration::from_millis(DEFAULT_DELAY_MS / 2)).await;
    assert_eq!(app.drain_completions(), 0);
    assert_eq!(app.session().status(), GenerationStatus::InProgress);

    assert!(app.wait_for_completion().await);
    assert_eq!(app.session().completed_generations(), 1);
    assert_eq!(app.session().status(), GenerationStatus::Idle);

    tokio::time::sleep(Duration::from_millis(DEFAULT_DELAY_MS * 2)).await;
    assert_eq!(app.drain_completions(), 0);
    assert_eq!(app.session().completed_generations(), 1);
}
