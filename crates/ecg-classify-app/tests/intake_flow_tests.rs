//! Integration tests for selection, removal, and clearing.

mod common;

use common::{FixedTransport, NORMAL_BODY, controller, record_files};
use ecg_classify_app::UiEvent;
use ecg_classify_core::{MAX_FILE_SIZE_BYTES, SelectedFile};
use ecg_classify_ui::SubmitControl;
use ecg_classify_ui::notify::NotificationSeverity;
use ecg_classify_ui::recording::RenderCall;

#[test]
fn intake_flow_tests_valid_pair_enables_submission() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);

    assert_eq!(app.selection().len(), 2);
    assert!(app.ui_state().preview_visible);
    assert_eq!(app.ui_state().preview_len, 2);
    assert!(app.ui_state().can_submit());

    let rows = app
        .surface()
        .target()
        .last_preview()
        .expect("preview should be rendered");
    assert_eq!(rows[0].name, "record1.dat");
    assert_eq!(rows[0].size_label, "488.28 KB");
    assert_eq!(rows[1].size_label, "300 Bytes");
}

#[test]
fn intake_flow_tests_invalid_selection_notifies_and_keeps_state() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);

    app.handle_event(
        UiEvent::FilesPicked(vec![SelectedFile::new("other.dat", vec![1])]),
        10,
    );

    assert_eq!(app.selection().files()[0].name(), "record1.dat");
    assert_eq!(app.selection().len(), 2);
    let notification = app
        .surface()
        .target()
        .last_notification()
        .expect("error should be notified");
    assert_eq!(notification.severity, NotificationSeverity::Error);
    assert_eq!(notification.message, "Please upload both .dat and .hea files");
}

#[test]
fn intake_flow_tests_oversized_file_is_named() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(
        UiEvent::FilesPicked(vec![
            SelectedFile::new("huge.dat", vec![0; MAX_FILE_SIZE_BYTES as usize + 1]),
            SelectedFile::new("huge.hea", vec![0; 10]),
        ]),
        0,
    );

    assert!(app.selection().is_empty());
    assert!(!app.ui_state().can_submit());
    let notification = app
        .surface()
        .target()
        .last_notification()
        .expect("error should be notified");
    assert!(notification.message.contains("huge.dat"));
}

#[test]
fn intake_flow_tests_empty_pick_is_ignored() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);
    let calls_before = app.surface().target().calls().len();

    app.handle_event(UiEvent::FilesPicked(Vec::new()), 10);

    assert_eq!(app.selection().len(), 2);
    assert_eq!(app.surface().target().calls().len(), calls_before);
}

#[test]
fn intake_flow_tests_remove_rerenders_then_hides_on_last() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);

    app.handle_event(UiEvent::RemoveClicked(0), 10);
    assert_eq!(app.selection().len(), 1);
    assert_eq!(app.selection().files()[0].name(), "record1.hea");
    assert!(app.ui_state().preview_visible);
    assert!(app.ui_state().can_submit());
    let rows = app
        .surface()
        .target()
        .last_preview()
        .expect("preview should be re-rendered");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].position, 0);

    app.handle_event(UiEvent::RemoveClicked(0), 20);
    assert!(app.selection().is_empty());
    assert!(!app.ui_state().preview_visible);
    assert_eq!(app.ui_state().submit, SubmitControl::Disabled);
}

#[test]
fn intake_flow_tests_remove_out_of_range_changes_nothing() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);
    app.handle_event(UiEvent::RemoveClicked(5), 10);
    assert_eq!(app.selection().len(), 2);
}

#[test]
fn intake_flow_tests_clear_resets_everything() {
    let transport = FixedTransport::new(200, NORMAL_BODY);
    let mut app = controller(transport);
    app.handle_event(UiEvent::FilesPicked(record_files()), 0);
    app.handle_event(UiEvent::SubmitClicked, 10);
    assert!(app.ui_state().results_visible);

    app.handle_event(UiEvent::ClearClicked, 20);

    assert!(app.selection().is_empty());
    assert!(app.last_result().is_none());
    assert!(!app.ui_state().preview_visible);
    assert!(!app.ui_state().results_visible);
    assert_eq!(app.ui_state().submit, SubmitControl::Disabled);
    assert!(
        app.surface()
            .target()
            .calls()
            .contains(&RenderCall::ResetFileInput)
    );
}

#[test]
fn intake_flow_tests_drop_uses_same_intake_and_clears_highlight() {
    let mut app = controller(FixedTransport::new(200, NORMAL_BODY));
    app.handle_event(UiEvent::DragEnter, 0);
    assert!(app.ui_state().drop_highlight);

    app.handle_event(UiEvent::FilesDropped(record_files()), 10);
    assert!(!app.ui_state().drop_highlight);
    assert_eq!(app.selection().len(), 2);
    assert!(app.ui_state().can_submit());

    app.handle_event(UiEvent::DragEnter, 20);
    app.handle_event(UiEvent::DragLeave, 30);
    assert!(!app.ui_state().drop_highlight);
}
