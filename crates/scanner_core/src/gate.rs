use crate::ScanPayload;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Open,
    Cooling,
}

/// Single-flight debouncer in front of the classifier.
///
/// An admitted scan puts the gate into `Cooling` and bumps its generation.
/// The owner is expected to schedule a reopen for that generation after the
/// cooldown; the reopen is purely time based and does not wait for the
/// lookup of the admitted scan to finish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanGate {
    state: GateState,
    generation: u64,
    last_accepted: Option<ScanPayload>,
}

impl ScanGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Generation of the most recent admission; 0 before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_accepted(&self) -> Option<&ScanPayload> {
        self.last_accepted.as_ref()
    }

    /// Offers a scan to the gate. Returns `false` (and changes nothing) while
    /// cooling.
    pub fn submit(&mut self, payload: &ScanPayload) -> bool {
        match self.state {
            GateState::Cooling => false,
            GateState::Open => {
                self.state = GateState::Cooling;
                self.generation += 1;
                self.last_accepted = Some(payload.clone());
                true
            }
        }
    }

    /// Reopens the gate if `generation` still names the current cooldown.
    pub fn reopen(&mut self, generation: u64) -> bool {
        if self.state == GateState::Cooling && generation == self.generation {
            self.state = GateState::Open;
            true
        } else {
            false
        }
    }
}
