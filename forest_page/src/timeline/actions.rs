//! What a trigger does to its timeline at each band crossing.

use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ToggleActionsError {
    #[error("toggle actions {0:?} must list exactly four actions")]
    Arity(String),
    #[error("unknown toggle action {0:?}")]
    Action(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = ToggleActionsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(ToggleActionsError::Action(other.to_string())),
        })
    }
}

/// A crossing of one of the two trigger bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    /// Scrolling forward past the start band.
    Enter,
    /// Scrolling forward past the end band.
    Leave,
    /// Scrolling backward past the end band.
    EnterBack,
    /// Scrolling backward past the start band.
    LeaveBack,
}

impl Crossing {
    pub fn is_forward(self) -> bool {
        matches!(self, Crossing::Enter | Crossing::Leave)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    pub const PLAY_AND_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    pub fn action_for(&self, crossing: Crossing) -> ToggleAction {
        match crossing {
            Crossing::Enter => self.on_enter,
            Crossing::Leave => self.on_leave,
            Crossing::EnterBack => self.on_enter_back,
            Crossing::LeaveBack => self.on_leave_back,
        }
    }
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self::PLAY_AND_REVERSE
    }
}

impl FromStr for ToggleActions {
    type Err = ToggleActionsError;

    /// Parses `"<enter> <leave> <enter-back> <leave-back>"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let actions = raw
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        let [on_enter, on_leave, on_enter_back, on_leave_back] = actions[..] else {
            return Err(ToggleActionsError::Arity(raw.to_string()));
        };
        Ok(Self {
            on_enter,
            on_leave,
            on_enter_back,
            on_leave_back,
        })
    }
}
