//! Logical input state sampled once per tick.

/// Held-key state for one tick, rebuilt by the host from queued key events
/// and consumed by `compute::update`. Direction and fire are level-triggered;
/// restart and quit are edge events handled by the host loop directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}
