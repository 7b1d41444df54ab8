mod defines;
mod dialog;
mod dialogaction;
mod game_mode_list;
mod uiapp;

pub use defines::*;
pub use dialog::*;
pub use dialogaction::*;
pub use game_mode_list::*;
pub use uiapp::*;
