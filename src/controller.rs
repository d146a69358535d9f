//! Menu and round state machines, expressed as pure event handlers.
//!
//! The binary owns the loops and the terminal; these functions only decide
//! what an input means in the current state.

use log::info;

use crate::compute::{new_round, player_jump};
use crate::config::GameConfig;
use crate::entities::{ButtonLayout, GameStatus, RoundState};
use crate::input::InputEvent;

#[derive(Clone, Debug, PartialEq)]
pub enum MenuChoice {
    Start,
    Quit,
}

/// What the round loop should do after an event.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundFlow {
    Continue,
    /// A fresh round replaced the finished one.
    Restart,
    Quit,
}

pub fn handle_menu_event(event: &InputEvent, layout: &ButtonLayout) -> Option<MenuChoice> {
    match event {
        InputEvent::Quit => Some(MenuChoice::Quit),
        _ if layout.start.is_clicked(event) => Some(MenuChoice::Start),
        _ if layout.quit.is_clicked(event) => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Apply one input to the round.  While playing only jumps matter; once the
/// round is over only the restart/quit buttons do.  A quit request wins in
/// either state.
pub fn handle_round_event(
    state: &RoundState,
    event: &InputEvent,
    layout: &ButtonLayout,
    config: &GameConfig,
) -> (RoundState, RoundFlow) {
    if *event == InputEvent::Quit {
        return (state.clone(), RoundFlow::Quit);
    }
    match state.status {
        GameStatus::Playing => match event {
            InputEvent::Jump => (player_jump(state, config), RoundFlow::Continue),
            _ => (state.clone(), RoundFlow::Continue),
        },
        GameStatus::GameOver => {
            if layout.restart.is_clicked(event) {
                info!("restarting after score {}", state.score);
                (new_round(config), RoundFlow::Restart)
            } else if layout.quit.is_clicked(event) {
                (state.clone(), RoundFlow::Quit)
            } else {
                (state.clone(), RoundFlow::Continue)
            }
        }
    }
}
