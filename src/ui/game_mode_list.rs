use egui::{Key, Sense, Vec2};

use crate::game_modes::GameModeDescriptor;

use super::DialogAction;

const SWATCH_SIZE: f32 = 14.0;

/// One row of the list, bound to the game it shows.
#[derive(Debug, Clone)]
pub struct GameModeListViewItem {
    pub game_mode: GameModeDescriptor,
}

/// The games sorted by name, with exactly one of them selected.
#[derive(Debug, Clone)]
pub struct GameModeListView {
    items: Vec<GameModeListViewItem>,
    selected: usize,
}

impl GameModeListView {
    /// Returns `None` when there is nothing to select.
    pub fn new(game_modes: &[GameModeDescriptor]) -> Option<Self> {
        if game_modes.is_empty() {
            return None;
        }
        let mut sorted = game_modes.to_vec();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        let items = sorted
            .into_iter()
            .map(|game_mode| GameModeListViewItem { game_mode })
            .collect();
        Some(Self { items, selected: 0 })
    }

    #[cfg(test)]
    pub fn items(&self) -> &[GameModeListViewItem] {
        &self.items
    }

    #[cfg(test)]
    pub fn selected_item(&self) -> usize {
        self.selected
    }

    pub fn selected_game_mode(&self) -> &GameModeDescriptor {
        &self.items[self.selected].game_mode
    }

    /// Returns true if the selection moved. Out of range indexes are ignored.
    pub fn select_item(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Selects the row bound to `game_mode`. Rows are matched on the whole
    /// descriptor, so of two games sharing an id the given one wins.
    pub fn set_selected_game_mode(&mut self, game_mode: &GameModeDescriptor) -> bool {
        match self.items.iter().position(|i| &i.game_mode == game_mode) {
            Some(index) => self.select_item(index),
            None => false,
        }
    }

    pub fn render(&self, ui: &mut egui::Ui) -> Option<DialogAction> {
        let mut action = None;
        for (index, item) in self.items.iter().enumerate() {
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, item.game_mode.theme.colour());
                let label = ui.selectable_label(index == self.selected, &item.game_mode.name);
                if label.clicked() && index != self.selected {
                    action = Some(DialogAction::SelectionChanged(index));
                }
            });
        }

        let (up, down) = ui.input(|i| (i.key_pressed(Key::ArrowUp), i.key_pressed(Key::ArrowDown)));
        if up && self.selected > 0 {
            action = Some(DialogAction::SelectionChanged(self.selected - 1));
        } else if down && self.selected + 1 < self.items.len() {
            action = Some(DialogAction::SelectionChanged(self.selected + 1));
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modes() -> Vec<GameModeDescriptor> {
        vec![
            GameModeDescriptor::new("skyrim", "Skyrim", [1, 1, 1]),
            GameModeDescriptor::new("oblivion", "Oblivion", [2, 2, 2]),
            GameModeDescriptor::new("fallout3", "Fallout 3", [3, 3, 3]),
        ]
    }

    fn names(list: &GameModeListView) -> Vec<&str> {
        list.items().iter().map(|i| i.game_mode.name.as_str()).collect()
    }

    #[test]
    fn empty_list_has_no_view() {
        assert!(GameModeListView::new(&[]).is_none());
    }

    #[test]
    fn items_are_sorted_by_name() {
        let list = GameModeListView::new(&modes()).unwrap();

        assert_eq!(names(&list), vec!["Fallout 3", "Oblivion", "Skyrim"]);
        assert_eq!(list.selected_item(), 0);
    }

    #[test]
    fn sorting_is_case_sensitive() {
        let input = vec![
            GameModeDescriptor::new("a", "alpha", [0, 0, 0]),
            GameModeDescriptor::new("b", "Beta", [0, 0, 0]),
        ];

        let list = GameModeListView::new(&input).unwrap();

        assert_eq!(names(&list), vec!["Beta", "alpha"]);
    }

    #[test]
    fn select_item_reports_changes() {
        let mut list = GameModeListView::new(&modes()).unwrap();

        assert!(list.select_item(2));
        assert!(!list.select_item(2));
        assert!(!list.select_item(17));
        assert_eq!(list.selected_game_mode().mode_id, "skyrim");
    }

    #[test]
    fn select_by_game_mode() {
        let input = modes();
        let mut list = GameModeListView::new(&input).unwrap();

        assert!(list.set_selected_game_mode(&input[1]));
        assert_eq!(list.selected_game_mode().mode_id, "oblivion");

        let unknown = GameModeDescriptor::new("morrowind", "Morrowind", [0, 0, 0]);
        assert!(!list.set_selected_game_mode(&unknown));
        assert_eq!(list.selected_game_mode().mode_id, "oblivion");
    }

    #[test]
    fn select_by_game_mode_matches_whole_descriptor() {
        let input = vec![
            GameModeDescriptor::new("skyrim", "Zeta Skyrim", [1, 1, 1]),
            GameModeDescriptor::new("skyrim", "Alpha Skyrim", [2, 2, 2]),
        ];
        let mut list = GameModeListView::new(&input).unwrap();

        assert!(list.set_selected_game_mode(&input[0]));
        assert_eq!(list.selected_game_mode().name, "Zeta Skyrim");
        assert_eq!(list.selected_item(), 1);
    }
}
