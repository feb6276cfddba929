//! Per-tick input snapshot

/// Input for a single tick, sampled from the keyboard once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Up arrow held
    pub move_up: bool,
    /// Down arrow held
    pub move_down: bool,
}
