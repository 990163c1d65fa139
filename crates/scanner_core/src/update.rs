use crate::{Diagnostic, Effect, LookupOutcome, Msg, ScreenState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScreenState, msg: Msg) -> (ScreenState, Vec<Effect>) {
    // Nothing may touch a torn-down screen, including late lookup results.
    if state.is_torn_down() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::PermissionChanged(permission) => {
            state.set_permission(permission);
            Vec::new()
        }
        Msg::ScanDecoded(payload) => {
            if !state.permission().is_granted() {
                return (state, Vec::new());
            }
            match state.admit_scan(&payload) {
                Some((scan_id, generation)) => vec![
                    Effect::ScheduleReopen { generation },
                    Effect::Lookup { scan_id, payload },
                ],
                None => Vec::new(),
            }
        }
        Msg::ReopenElapsed { generation } => {
            state.reopen_gate(generation);
            Vec::new()
        }
        Msg::LookupResolved { scan_id, outcome } => resolve_lookup(&mut state, scan_id, outcome),
        Msg::AcceptPressed => {
            let intent = state.presenter_mut().accept();
            navigate(&mut state, intent)
        }
        Msg::CreatePressed => {
            let intent = state.presenter_mut().create();
            navigate(&mut state, intent)
        }
        Msg::DismissPressed => {
            if state.presenter_mut().dismiss() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CancelPressed => {
            if state.presenter_mut().cancel() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::BackPressed => {
            if state.presenter_mut().close() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Teardown => {
            let (cooling, had_pending) = state.tear_down();
            let mut effects = Vec::with_capacity(2);
            if cooling {
                effects.push(Effect::CancelReopen);
            }
            if had_pending {
                effects.push(Effect::AbandonLookups);
            }
            effects
        }
    };

    (state, effects)
}

fn resolve_lookup(
    state: &mut ScreenState,
    scan_id: crate::ScanId,
    outcome: LookupOutcome,
) -> Vec<Effect> {
    if state.take_pending(scan_id).is_none() {
        return vec![Effect::Report(Diagnostic::UnexpectedResult {
            scan_id,
            payload: outcome.payload().clone(),
        })];
    }

    match outcome {
        LookupOutcome::Failed(payload, cause) => vec![Effect::Report(Diagnostic::LookupFailed {
            scan_id,
            payload,
            cause,
        })],
        outcome => {
            state.presenter_mut().present(outcome);
            Vec::new()
        }
    }
}

fn navigate(state: &mut ScreenState, intent: Option<crate::NavigationIntent>) -> Vec<Effect> {
    match intent {
        Some(intent) => {
            state.mark_dirty();
            vec![Effect::Navigate(intent)]
        }
        None => Vec::new(),
    }
}
