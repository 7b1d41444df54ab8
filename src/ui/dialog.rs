use std::collections::HashMap;

use egui::{Key, RichText, ScrollArea};

use crate::{
    game_modes::{GameIcon, GameModeDescriptor},
    settings::SettingsStore,
};

use super::{ui_colors::ERROR_COLOR, DialogAction, GameModeListView};

const PROMPT: &str = "Select the game you would like to manage mods for:";
const LIST_HEIGHT: f32 = 260.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogResult {
    #[default]
    None,
    Ok,
    Cancelled,
}

/// Selects the game for which mods will be managed.
pub struct GameModeSelectionDialog<S: SettingsStore> {
    list: GameModeListView,
    remember: bool,
    icon: GameIcon,
    icon_changed: bool,
    result: DialogResult,
    settings: S,
}

impl<S: SettingsStore> GameModeSelectionDialog<S> {
    /// Builds the dialog with the remembered game selected,
    /// or the first game by name if none is remembered.
    pub fn new(game_modes: &[GameModeDescriptor], settings: S) -> eyre::Result<Self> {
        let mut list = GameModeListView::new(game_modes)
            .ok_or_else(|| eyre::eyre!("No game modes to choose from"))?;

        let mut by_id: HashMap<&str, &GameModeDescriptor> = HashMap::new();
        for game_mode in game_modes {
            by_id.entry(game_mode.mode_id.as_str()).or_insert(game_mode);
        }
        if let Some(remembered) = by_id.get(settings.remembered_game_mode()) {
            list.set_selected_game_mode(remembered);
        }

        tracing::debug!(
            selected = %list.selected_game_mode().mode_id,
            remembered = %settings.remembered_game_mode(),
            "Game selection dialog ready"
        );

        Ok(Self {
            list,
            remember: settings.remember_game_mode(),
            icon: GameIcon::default_icon(),
            icon_changed: false,
            result: DialogResult::None,
            settings,
        })
    }

    pub fn selected_game_mode_id(&self) -> &str {
        &self.list.selected_game_mode().mode_id
    }

    pub fn icon(&self) -> &GameIcon {
        &self.icon
    }

    pub fn result(&self) -> DialogResult {
        self.result
    }

    /// True once after each selection change, so the window can pick up `icon()`.
    pub fn take_icon_changed(&mut self) -> bool {
        std::mem::take(&mut self.icon_changed)
    }

    #[cfg(test)]
    pub fn selected_game_mode(&self) -> &GameModeDescriptor {
        self.list.selected_game_mode()
    }

    #[cfg(test)]
    pub fn list(&self) -> &GameModeListView {
        &self.list
    }

    #[cfg(test)]
    pub fn remember(&self) -> bool {
        self.remember
    }

    #[cfg(test)]
    pub fn settings(&self) -> &S {
        &self.settings
    }

    #[cfg(test)]
    pub fn into_settings(self) -> S {
        self.settings
    }

    pub fn handle_action(&mut self, action: DialogAction) -> eyre::Result<()> {
        if self.result != DialogResult::None {
            return Ok(());
        }
        match action {
            DialogAction::SelectionChanged(index) => {
                if self.list.select_item(index) {
                    self.on_selected_item_changed();
                }
            }
            DialogAction::RememberToggled(remember) => self.remember = remember,
            DialogAction::Accept => self.accept()?,
            DialogAction::Cancel => {
                tracing::debug!("Game selection cancelled");
                self.result = DialogResult::Cancelled;
            }
        }
        Ok(())
    }

    fn on_selected_item_changed(&mut self) {
        let game_mode = self.list.selected_game_mode();
        tracing::debug!(mode_id = %game_mode.mode_id, "Selected game changed");
        self.icon = game_mode.theme.icon();
        self.icon_changed = true;
    }

    fn accept(&mut self) -> eyre::Result<()> {
        let mode_id = self.selected_game_mode_id().to_string();
        self.settings.set_remember_game_mode(self.remember);
        self.settings.set_remembered_game_mode(mode_id.clone());
        self.settings.save()?;
        tracing::info!(mode_id = %mode_id, remember = self.remember, "Game selected");
        self.result = DialogResult::Ok;
        Ok(())
    }

    pub fn render(&self, ui: &mut egui::Ui, error: Option<&str>) -> Option<DialogAction> {
        let mut action = None;
        ui.label(PROMPT);
        ui.separator();

        ScrollArea::vertical()
            .max_height(LIST_HEIGHT)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                action = self.list.render(ui);
            });

        ui.separator();
        let mut remember = self.remember;
        if ui.checkbox(&mut remember, "Remember this choice").changed() {
            action = Some(DialogAction::RememberToggled(remember));
        }
        if let Some(error) = error {
            ui.label(RichText::new(error).color(ERROR_COLOR));
        }

        ui.horizontal(|ui| {
            if ui.button("OK").clicked() {
                action = Some(DialogAction::Accept);
            }
            if ui.button("Cancel").clicked() {
                action = Some(DialogAction::Cancel);
            }
        });

        let (enter, escape) = ui.input(|i| (i.key_pressed(Key::Enter), i.key_pressed(Key::Escape)));
        if enter {
            action = Some(DialogAction::Accept);
        } else if escape {
            action = Some(DialogAction::Cancel);
        }
        action
    }
}
