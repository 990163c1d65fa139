use std::sync::Once;

use pretty_assertions::assert_eq;
use scanner_core::{
    update, CameraPermission, Diagnostic, Effect, GateState, LookupFailure, LookupOutcome,
    ModalKind, ModalView, Msg, NavigationIntent, ScanId, ScanPayload, ScreenState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(scan_logging::initialize_for_tests);
}

fn granted() -> ScreenState {
    let (state, _) = update(
        ScreenState::new(),
        Msg::PermissionChanged(CameraPermission::Granted),
    );
    state
}

fn scan(state: ScreenState, text: &str) -> (ScreenState, Vec<Effect>) {
    update(state, Msg::ScanDecoded(ScanPayload::from(text)))
}

fn lookup_id(effects: &[Effect]) -> ScanId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Lookup { scan_id, .. } => Some(*scan_id),
            _ => None,
        })
        .expect("lookup effect")
}

fn reopen_generation(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleReopen { generation } => Some(*generation),
            _ => None,
        })
        .expect("reopen effect")
}

fn resolve(state: ScreenState, scan_id: ScanId, outcome: LookupOutcome) -> (ScreenState, Vec<Effect>) {
    update(state, Msg::LookupResolved { scan_id, outcome })
}

#[test]
fn accepted_scan_schedules_reopen_and_lookup() {
    init_logging();
    let (mut state, effects) = scan(granted(), "111");

    assert_eq!(
        effects,
        vec![
            Effect::ScheduleReopen { generation: 1 },
            Effect::Lookup {
                scan_id: 1,
                payload: ScanPayload::from("111"),
            },
        ]
    );
    let view = state.view();
    assert_eq!(view.gate, GateState::Cooling);
    assert_eq!(view.pending_lookups, 1);
    assert_eq!(view.last_scanned, Some(ScanPayload::from("111")));
    assert!(state.consume_dirty());
}

#[test]
fn scans_while_cooling_are_dropped_silently() {
    init_logging();
    let (state, _) = scan(granted(), "333");
    let mut state = state;
    state.consume_dirty();

    let mut accepted = 1;
    for text in ["333", "333", "444", ""] {
        let (next, effects) = scan(state, text);
        if !effects.is_empty() {
            accepted += 1;
        }
        state = next;
    }

    assert_eq!(accepted, 1);
    assert_eq!(state.view().accepted_scans, 1);
    assert!(!state.consume_dirty());
}

#[test]
fn reopen_elapsed_admits_next_scan() {
    init_logging();
    let (state, effects) = scan(granted(), "333");
    let generation = reopen_generation(&effects);

    let (state, effects) = update(state, Msg::ReopenElapsed { generation });
    assert!(effects.is_empty());
    assert_eq!(state.view().gate, GateState::Open);

    let (state, effects) = scan(state, "444");
    assert_eq!(lookup_id(&effects), 2);
    assert_eq!(state.view().accepted_scans, 2);
}

#[test]
fn scans_are_ignored_without_camera_permission() {
    init_logging();
    let (state, effects) = scan(ScreenState::new(), "111");
    assert!(effects.is_empty());
    assert_eq!(state.view().gate, GateState::Open);

    let (state, _) = update(state, Msg::PermissionChanged(CameraPermission::Denied));
    let (state, effects) = scan(state, "111");
    assert!(effects.is_empty());
    assert_eq!(state.view().accepted_scans, 0);
}

#[test]
fn known_record_then_accept_navigates_to_item() {
    init_logging();
    let (state, effects) = scan(granted(), "111");
    let scan_id = lookup_id(&effects);

    let (state, effects) = resolve(state, scan_id, LookupOutcome::Known(ScanPayload::from("111")));
    assert!(effects.is_empty());
    assert_eq!(
        state.view().modal,
        Some(ModalView {
            kind: ModalKind::Known,
            payload: ScanPayload::from("111"),
        })
    );

    let (state, effects) = update(state, Msg::AcceptPressed);
    assert_eq!(
        effects,
        vec![Effect::Navigate(NavigationIntent::OpenItem {
            key: ScanPayload::from("111")
        })]
    );
    assert_eq!(state.view().modal, None);
}

#[test]
fn unknown_record_then_create_navigates_to_create() {
    init_logging();
    let (state, effects) = scan(granted(), "222");
    let scan_id = lookup_id(&effects);

    let (state, _) = resolve(state, scan_id, LookupOutcome::Unknown(ScanPayload::from("222")));
    assert_eq!(
        state.view().modal.map(|modal| modal.kind),
        Some(ModalKind::Unknown)
    );

    let (state, effects) = update(state, Msg::CreatePressed);
    assert_eq!(
        effects,
        vec![Effect::Navigate(NavigationIntent::OpenCreate {
            prefill_key: ScanPayload::from("222")
        })]
    );
    assert_eq!(state.view().modal, None);
}

#[test]
fn failed_lookup_reports_once_and_shows_nothing() {
    init_logging();
    let (state, effects) = scan(granted(), "555");
    let scan_id = lookup_id(&effects);

    let (state, effects) = resolve(
        state,
        scan_id,
        LookupOutcome::Failed(ScanPayload::from("555"), LookupFailure::new("db locked")),
    );

    assert_eq!(
        effects,
        vec![Effect::Report(Diagnostic::LookupFailed {
            scan_id,
            payload: ScanPayload::from("555"),
            cause: LookupFailure::new("db locked"),
        })]
    );
    assert_eq!(state.view().modal, None);
    assert_eq!(state.view().pending_lookups, 0);
}

#[test]
fn second_result_for_same_scan_is_ignored() {
    init_logging();
    let (state, effects) = scan(granted(), "111");
    let scan_id = lookup_id(&effects);

    let (state, _) = resolve(state, scan_id, LookupOutcome::Known(ScanPayload::from("111")));
    let (state, _) = update(state, Msg::DismissPressed);
    let (state, effects) = resolve(state, scan_id, LookupOutcome::Unknown(ScanPayload::from("111")));

    assert_eq!(
        effects,
        vec![Effect::Report(Diagnostic::UnexpectedResult {
            scan_id,
            payload: ScanPayload::from("111"),
        })]
    );
    assert_eq!(state.view().modal, None);
}

#[test]
fn overlapping_lookups_show_the_latest_arrival() {
    init_logging();
    let (state, effects) = scan(granted(), "A");
    let first = lookup_id(&effects);
    let generation = reopen_generation(&effects);
    let (state, _) = update(state, Msg::ReopenElapsed { generation });
    let (state, effects) = scan(state, "B");
    let second = lookup_id(&effects);

    // B resolves first, then A: resolution order wins over submission order.
    let (state, _) = resolve(state, second, LookupOutcome::Known(ScanPayload::from("B")));
    let (state, _) = resolve(state, first, LookupOutcome::Known(ScanPayload::from("A")));

    let (state, effects) = update(state, Msg::AcceptPressed);
    assert_eq!(
        effects,
        vec![Effect::Navigate(NavigationIntent::OpenItem {
            key: ScanPayload::from("A")
        })]
    );
    assert_eq!(state.view().pending_lookups, 0);
}

#[test]
fn action_after_overwrite_carries_new_payload() {
    init_logging();
    let (state, effects) = scan(granted(), "O1");
    let first = lookup_id(&effects);
    let (state, _) = update(state, Msg::ReopenElapsed { generation: reopen_generation(&effects) });
    let (state, effects) = scan(state, "O2");
    let second = lookup_id(&effects);

    let (state, _) = resolve(state, first, LookupOutcome::Unknown(ScanPayload::from("O1")));
    let (state, _) = resolve(state, second, LookupOutcome::Unknown(ScanPayload::from("O2")));

    assert_eq!(
        state.view().modal.map(|modal| modal.payload),
        Some(ScanPayload::from("O2"))
    );
    let (_, effects) = update(state, Msg::CreatePressed);
    assert_eq!(
        effects,
        vec![Effect::Navigate(NavigationIntent::OpenCreate {
            prefill_key: ScanPayload::from("O2")
        })]
    );
}

#[test]
fn back_closes_modal_without_navigation() {
    init_logging();
    let (state, effects) = scan(granted(), "111");
    let (state, _) = resolve(state, lookup_id(&effects), LookupOutcome::Known(ScanPayload::from("111")));

    let (mut state, effects) = update(state, Msg::BackPressed);
    assert!(effects.is_empty());
    assert_eq!(state.view().modal, None);
    assert!(state.consume_dirty());
}
