//! Gate lifecycle as an explicit machine.
//!
//! Named states replace ad-hoc entering/running flags so the single-fire
//! enter and idempotent close guarantees are testable on their own.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Inert,
    Open,
    Burning,
    Closed,
}

#[derive(Debug)]
pub struct GateMachine {
    state: GateState,
}

impl GateMachine {
    pub fn new() -> Self {
        Self {
            state: GateState::Inert,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Inert -> Open.
    pub fn open(&mut self) -> bool {
        if self.state == GateState::Inert {
            self.state = GateState::Open;
            true
        } else {
            false
        }
    }

    /// Open -> Burning. A second trigger while burning is refused.
    pub fn begin_burn(&mut self) -> bool {
        if self.state == GateState::Open {
            self.state = GateState::Burning;
            true
        } else {
            false
        }
    }

    /// Open or Burning -> Closed. Returns true exactly once.
    pub fn close(&mut self) -> bool {
        match self.state {
            GateState::Open | GateState::Burning => {
                self.state = GateState::Closed;
                true
            }
            _ => false,
        }
    }
}

impl Default for GateMachine {
    fn default() -> Self {
        Self::new()
    }
}
