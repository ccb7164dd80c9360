use dusk_app::prelude::*;
use dusk_app::ReportStatus;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn run(input: &str) -> RunOutcome {
    init_tracing();
    let mut screen = ThemeScreen::new(Viewport::default(), AnimatorConfig::default());
    run_scenario(input, HeadlessRunConfig::default(), &mut screen).unwrap()
}

#[test]
fn toggle_to_dark_and_settle() {
    let outcome = run(r##"{"steps": [
        {"type": "assert_text_contains", "id": "label", "value": "LIGHT"},
        {"type": "assert_color", "id": "root", "color": "#F8F8F8"},
        {"type": "toggle", "on": true},
        {"type": "assert_text_contains", "id": "label", "value": "DARK"},
        {"type": "assert_color", "id": "root", "color": "#F8F8F8"},
        {"type": "assert_progress", "min": 0.0, "max": 0.0},
        {"type": "tick", "frames": 10},
        {"type": "assert_progress", "min": 0.01, "max": 0.5},
        {"type": "settle"},
        {"type": "assert_settled"},
        {"type": "assert_theme", "theme": "dark"},
        {"type": "assert_progress", "min": 1.0, "max": 1.0},
        {"type": "assert_color", "id": "root", "color": "#1E1E1E"},
        {"type": "assert_color", "id": "circle", "color": "#252525"},
        {"type": "assert_color", "id": "label", "color": "#F8F8F8"},
        {"type": "assert_color", "id": "status_bar", "color": "#1E1E1E"}
    ]}"##);

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Passed);
    assert_eq!(report.theme, Some(Theme::Dark));
    assert_eq!(report.progress, Some(1.0));
    assert!(report.elapsed_frames > 10);
    assert_eq!(report.elapsed_ms, report.elapsed_frames * 16);
}

#[test]
fn rapid_double_toggle_returns_to_light() {
    let outcome = run(r##"{"steps": [
        {"type": "toggle", "on": true},
        {"type": "tick", "frames": 5},
        {"type": "toggle", "on": false},
        {"type": "assert_text_contains", "id": "label", "value": "LIGHT"},
        {"type": "settle", "max_frames": 2000},
        {"type": "assert_progress", "min": 0.0, "max": 0.0},
        {"type": "assert_color", "id": "root", "color": "#F8F8F8"},
        {"type": "assert_color", "id": "circle", "color": "#FFF"},
        {"type": "assert_color", "id": "label", "color": "#1E1E1E"}
    ]}"##);

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
    assert_eq!(outcome.report().theme, Some(Theme::Light));
}

#[test]
fn mid_flight_colors_are_blended() {
    let outcome = run(r##"{"steps": [
        {"type": "set_theme", "theme": "dark"},
        {"type": "wait", "ms": 300},
        {"type": "assert_color", "id": "root", "color": "#F8F8F8", "tolerance": 0.05}
    ]}"##);

    let report = outcome.report();
    assert_eq!(report.status, ReportStatus::Failed);
    assert_eq!(report.assertion.as_deref(), Some("assert_color"));
    assert_eq!(report.failed_step_index, Some(2));
    let progress = report.progress.unwrap();
    assert!(progress > 0.0 && progress < 1.0);
}

#[test]
fn failing_assertion_reports_step_index() {
    let outcome = run(r##"{"steps": [
        {"type": "assert_exists", "id": "switch"},
        {"type": "assert_text_contains", "id": "label", "value": "DARK"}
    ]}"##);

    assert!(outcome.is_failed());
    let report = outcome.report();
    assert_eq!(report.failed_step_index, Some(1));
    assert_eq!(report.assertion.as_deref(), Some("assert_text_contains"));
    assert!(report
        .message
        .as_deref()
        .unwrap_or_default()
        .contains("expected substring 'DARK'"));
}

#[test]
fn settle_budget_exhaustion_fails() {
    let outcome = run(r##"{"steps": [
        {"type": "toggle", "on": true},
        {"type": "settle", "max_frames": 5}
    ]}"##);

    let report = outcome.report();
    assert!(outcome.is_failed());
    assert_eq!(report.assertion.as_deref(), Some("settle"));
    assert_eq!(report.elapsed_frames, 5);
    assert_eq!(report.theme, Some(Theme::Dark));
}

#[test]
fn redundant_toggle_does_not_start_animation() {
    let outcome = run(r##"{"steps": [
        {"type": "toggle", "on": false},
        {"type": "assert_settled"},
        {"type": "assert_theme", "theme": "light"}
    ]}"##);

    assert!(!outcome.is_failed(), "{:?}", outcome.report());
}

#[test]
fn malformed_scenario_is_an_error() {
    let mut screen = ThemeScreen::new(Viewport::default(), AnimatorConfig::default());
    let result = run_scenario(
        r#"{"steps": [{"type": "explode"}]}"#,
        HeadlessRunConfig::default(),
        &mut screen,
    );
    assert!(result.is_err());
}

#[test]
fn zero_tick_config_is_rejected() {
    let mut screen = ThemeScreen::new(Viewport::default(), AnimatorConfig::default());
    let cfg = HeadlessRunConfig {
        tick_ms: 0,
        ..Default::default()
    };
    let result = run_scenario(r#"{"steps": []}"#, cfg, &mut screen);
    assert!(result.is_err());
}
