// Actions - one per control on the panel, applied through a single reducer
use crate::config::{Field, MasonryConfig};
use rand::Rng;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ToggleShowNumbers,
    ToggleLoop,
    Increment(Field),
    Decrement(Field),
    Randomize,
    Regenerate,
    Reset,
}

/// Outcome of applying an action to the current configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new configuration replaces the old one and the view re-renders
    Changed(MasonryConfig),
    /// Disabled control or a decrement at its floor; nothing happens
    Unchanged,
}

impl Transition {
    pub fn is_changed(&self) -> bool {
        matches!(self, Transition::Changed(_))
    }

    pub fn config(&self) -> Option<MasonryConfig> {
        match self {
            Transition::Changed(config) => Some(*config),
            Transition::Unchanged => None,
        }
    }
}

impl Action {
    /// Every control except the loop toggle is disabled while looping
    pub fn is_enabled(&self, config: &MasonryConfig) -> bool {
        matches!(self, Action::ToggleLoop) || !config.looping
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::ToggleShowNumbers => write!(f, "Show numbers"),
            Action::ToggleLoop => write!(f, "Loop"),
            Action::Increment(field) => write!(f, "+ {}", field.label()),
            Action::Decrement(field) => write!(f, "- {}", field.label()),
            Action::Randomize => write!(f, "Randomize"),
            Action::Regenerate => write!(f, "Regenerate"),
            Action::Reset => write!(f, "Reset"),
        }
    }
}

/// Reducer over the masonry configuration
pub fn apply<R: Rng + ?Sized>(config: MasonryConfig, action: Action, rng: &mut R) -> Transition {
    if !action.is_enabled(&config) {
        return Transition::Unchanged;
    }

    match action {
        Action::ToggleShowNumbers => Transition::Changed(config.toggle_show_numbers()),
        Action::ToggleLoop => Transition::Changed(config.toggle_loop()),
        Action::Increment(field) => Transition::Changed(config.increment(field)),
        Action::Decrement(field) => match config.decrement(field) {
            Some(next) => Transition::Changed(next),
            None => Transition::Unchanged,
        },
        Action::Randomize => Transition::Changed(MasonryConfig::randomize(rng)),
        Action::Regenerate => Transition::Changed(config.regenerate(rng)),
        Action::Reset => Transition::Changed(MasonryConfig::reset()),
    }
}
