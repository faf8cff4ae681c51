use super::handler::KeyAction;
use crate::game::Direction;

/// Everything the player asked for during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Direction presses this frame, oldest first
    pub directions: Vec<Direction>,
    /// Restart was pressed; only honoured once the game is over
    pub restart: bool,
}

impl FrameInput {
    /// Fold one key action into the snapshot
    ///
    /// Quit and unknown keys are not part of the game input and leave it unchanged.
    pub fn record(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => self.directions.push(direction),
            KeyAction::Restart => self.restart = true,
            KeyAction::Quit | KeyAction::None => {}
        }
    }

    /// Hand the snapshot over and start an empty one for the next frame
    pub fn take(&mut self) -> FrameInput {
        std::mem::take(self)
    }
}
