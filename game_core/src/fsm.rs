//! Match lifecycle state machine
//!
//! `Menu -> Running <-> Paused`, with `Ended` once a side reaches the
//! winning score and `Quit` returning to the menu from anywhere in a match.

/// Lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Running,
    Paused,
    Ended,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    TogglePause,
    GameOver,
    PlayAgain,
    Quit,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    success: bool,
    from_phase: Phase,
    to_phase: Phase,
    action: Action,
}

impl TransitionResult {
    pub fn success(&self) -> bool {
        self.success
    }

    pub fn from_phase(&self) -> Phase {
        self.from_phase
    }

    pub fn to_phase(&self) -> Phase {
        self.to_phase
    }

    pub fn action(&self) -> Action {
        self.action
    }

    /// Whether this transition begins a fresh match
    pub fn starts_match(&self) -> bool {
        self.success && matches!(self.action, Action::Start | Action::PlayAgain)
    }
}

/// Match finite state machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    phase: Phase,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self { phase: Phase::Menu }
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: Action) -> bool {
        self.next_phase(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: Action) -> TransitionResult {
        let from_phase = self.phase;

        if let Some(next_phase) = self.next_phase(action) {
            self.phase = next_phase;
            TransitionResult {
                success: true,
                from_phase,
                to_phase: next_phase,
                action,
            }
        } else {
            TransitionResult {
                success: false,
                from_phase,
                to_phase: from_phase,
                action,
            }
        }
    }

    /// Get next phase for a given action (if valid)
    fn next_phase(&self, action: Action) -> Option<Phase> {
        match (self.phase, action) {
            // From Menu
            (Phase::Menu, Action::Start) => Some(Phase::Running),

            // From Running
            (Phase::Running, Action::TogglePause) => Some(Phase::Paused),
            (Phase::Running, Action::GameOver) => Some(Phase::Ended),

            // From Paused
            (Phase::Paused, Action::TogglePause) => Some(Phase::Running),

            // From Ended
            (Phase::Ended, Action::PlayAgain) => Some(Phase::Running),

            // Leaving a match
            (Phase::Running | Phase::Paused | Phase::Ended, Action::Quit) => Some(Phase::Menu),

            // Invalid transition
            _ => None,
        }
    }

    /// A match exists and has not ended
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::Ended
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}
