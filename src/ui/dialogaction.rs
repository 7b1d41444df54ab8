/// Something the user did in the game selection dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// A row of the game list, by display position.
    SelectionChanged(usize),
    RememberToggled(bool),
    Accept,
    Cancel,
}
