use std::sync::Once;

use resumatch_core::{
    update, AppState, Effect, MatchRow, MatchTier, Msg, ResultsView, ScrollTarget, Severity,
    SubmitError, SubmitErrorKind, PDF_MIME_TYPE, SUCCESS_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn submitting_at_zero() -> AppState {
    let (state, _) = update(
        AppState::new(),
        Msg::FilePicked {
            name: "resume.pdf".to_string(),
            size_bytes: 200 * 1024,
            mime_type: PDF_MIME_TYPE.to_string(),
        },
    );
    let (state, _) = update(state, Msg::SubmitClicked { now_ms: 0 });
    state
}

fn sample_rows() -> Vec<MatchRow> {
    vec![
        MatchRow {
            job: "Software Engineering".to_string(),
            percentage: 91.3,
            level: "Excellent Match".to_string(),
        },
        MatchRow {
            job: "Data Science & Analytics".to_string(),
            percentage: 78.2,
            level: "High Match".to_string(),
        },
    ]
}

fn server_error(code: u16) -> SubmitError {
    SubmitError {
        kind: SubmitErrorKind::ServerError(code),
        detail: format!("http status {code}"),
    }
}

fn reveal_effects(message: &str, severity: Severity) -> Vec<Effect> {
    vec![
        Effect::Notify {
            severity,
            message: message.to_string(),
        },
        Effect::ScrollTo {
            target: ScrollTarget::Results,
        },
    ]
}

#[test]
fn early_success_waits_for_the_floor() {
    init_logging();
    let mut state = submitting_at_zero();
    assert!(state.consume_dirty());

    // Response lands 200ms in: held, nothing visible changes.
    let (mut state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(sample_rows()),
            now_ms: 200,
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().submitting);
    assert!(!state.consume_dirty());

    // One frame shy of the floor: still nothing.
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 9999 });
    assert!(effects.is_empty());
    assert!(state.view().submitting);

    // The frame that crosses the floor reveals.
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 10_000 });
    assert_eq!(effects, reveal_effects(SUCCESS_MESSAGE, Severity::Success));
    let view = state.view();
    assert!(!view.submitting);
    assert!(view.submit_enabled);
    match view.results.as_ref().unwrap() {
        ResultsView::Matches(cards) => assert_eq!(cards.len(), 2),
        other => panic!("expected match cards, got {other:?}"),
    }
}

#[test]
fn late_response_reveals_immediately() {
    init_logging();
    let state = submitting_at_zero();
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 14_000 });
    assert!(effects.is_empty());
    assert!(state.view().submitting);

    let (state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(sample_rows()),
            now_ms: 15_000,
        },
    );

    assert_eq!(effects, reveal_effects(SUCCESS_MESSAGE, Severity::Success));
    assert!(!state.view().submitting);
}

#[test]
fn failure_respects_the_floor_too() {
    init_logging();
    let state = submitting_at_zero();
    let (state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Err(server_error(500)),
            now_ms: 300,
        },
    );
    assert!(effects.is_empty());
    assert!(state.view().submitting);

    let (state, effects) = update(state, Msg::FrameTick { now_ms: 10_000 });

    let expected_message = SubmitErrorKind::ServerError(500).user_message();
    assert_eq!(effects, reveal_effects(expected_message, Severity::Error));
    match state.view().results.as_ref().unwrap() {
        ResultsView::Error(panel) => {
            assert_eq!(panel.message, expected_message);
            assert_eq!(panel.hints.len(), 5);
        }
        other => panic!("expected an error panel, got {other:?}"),
    }
}

#[test]
fn failure_classes_read_differently() {
    init_logging();
    let connect = SubmitErrorKind::CannotConnect.user_message();
    let bad_request = SubmitErrorKind::BadRequest(400).user_message();
    let server = SubmitErrorKind::ServerError(500).user_message();
    let timeout = SubmitErrorKind::Timeout.user_message();

    assert!(connect.contains("Cannot connect"));
    assert!(bad_request.contains("Invalid file"));
    assert!(server.contains("Server error"));
    assert_ne!(connect, server);
    assert_ne!(bad_request, server);
    assert_ne!(timeout, connect);
}

#[test]
fn stale_outcome_after_removal_is_dropped() {
    init_logging();
    let state = submitting_at_zero();
    let (mut state, _) = update(state, Msg::FileRemoved);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(sample_rows()),
            now_ms: 11_000,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.results.is_none());
    assert!(view.selected_file.is_none());
    assert!(!state.consume_dirty());
}

#[test]
fn outcome_from_a_previous_submission_is_dropped() {
    init_logging();
    // The first file is swapped out and resubmitted while its request is
    // still in flight.
    let state = submitting_at_zero();
    let (state, _) = update(state, Msg::FileRemoved);
    let (state, _) = update(
        state,
        Msg::FilePicked {
            name: "other.pdf".to_string(),
            size_bytes: 300 * 1024,
            mime_type: PDF_MIME_TYPE.to_string(),
        },
    );
    let (mut state, _) = update(state, Msg::SubmitClicked { now_ms: 1_000 });
    assert!(state.consume_dirty());

    // The first request's response lands past the floor. It belongs to the
    // removed file and must not surface as the second submission's result.
    let (mut state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(sample_rows()),
            now_ms: 12_000,
        },
    );
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    let view = state.view();
    assert!(view.submitting);
    assert!(view.results.is_none());

    // The second submission's own response still reveals.
    let (state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 1_000,
            outcome: Err(server_error(502)),
            now_ms: 12_500,
        },
    );
    let expected_message = SubmitErrorKind::ServerError(502).user_message();
    assert_eq!(effects, reveal_effects(expected_message, Severity::Error));
    assert!(!state.view().submitting);
}

#[test]
fn held_outcome_does_not_survive_removal_and_resubmit() {
    init_logging();
    let state = submitting_at_zero();
    let (state, effects) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(sample_rows()),
            now_ms: 200,
        },
    );
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::FileRemoved);
    let (state, _) = update(
        state,
        Msg::FilePicked {
            name: "other.pdf".to_string(),
            size_bytes: 300 * 1024,
            mime_type: PDF_MIME_TYPE.to_string(),
        },
    );
    let (state, _) = update(state, Msg::SubmitClicked { now_ms: 1_000 });

    // Past the second submission's floor: the parked outcome of the first
    // one is gone, so nothing reveals.
    let (state, effects) = update(state, Msg::FrameTick { now_ms: 11_500 });
    assert!(effects.is_empty());
    assert!(state.view().submitting);
    assert!(state.view().results.is_none());
}

#[test]
fn empty_match_list_shows_the_empty_state() {
    init_logging();
    let state = submitting_at_zero();
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(Vec::new()),
            now_ms: 12_000,
        },
    );

    assert_eq!(state.view().results, Some(ResultsView::Empty));
}

#[test]
fn tiers_flow_into_the_cards() {
    init_logging();
    let rows = vec![
        MatchRow {
            job: "Software Engineering".to_string(),
            percentage: 91.3,
            level: "Excellent Match".to_string(),
        },
        MatchRow {
            job: "Product Management".to_string(),
            percentage: 84.9,
            level: "Very High Match".to_string(),
        },
        MatchRow {
            job: "Data Science & Analytics".to_string(),
            percentage: 78.2,
            level: "High Match".to_string(),
        },
        MatchRow {
            job: "UI/UX Design".to_string(),
            percentage: 71.0,
            level: "Good Match".to_string(),
        },
        MatchRow {
            job: "Accounting & Finance".to_string(),
            percentage: 50.0,
            level: "Moderate Match".to_string(),
        },
    ];
    let state = submitting_at_zero();
    let (state, _) = update(
        state,
        Msg::AnalysisDone {
            submitted_at: 0,
            outcome: Ok(rows),
            now_ms: 12_000,
        },
    );

    let view = state.view();
    let cards = match view.results.as_ref().unwrap() {
        ResultsView::Matches(cards) => cards,
        other => panic!("expected match cards, got {other:?}"),
    };
    let tiers: Vec<MatchTier> = cards.iter().map(|card| card.tier).collect();
    assert_eq!(
        tiers,
        vec![
            MatchTier::Excellent,
            MatchTier::VeryHigh,
            MatchTier::High,
            MatchTier::Good,
            MatchTier::Moderate,
        ]
    );
    // Service order is display order.
    assert_eq!(cards[0].job, "Software Engineering");
    assert_eq!(cards[4].job, "Accounting & Finance");
    assert_eq!(cards[0].percentage, 91.3);
}
