use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

use super::GameModeTheme;

/// A supported game the mod manager can operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModeDescriptor {
    pub mode_id: String,
    pub name: String,
    pub theme: GameModeTheme,
}

impl GameModeDescriptor {
    pub fn new<I: Into<String>, N: Into<String>>(mode_id: I, name: N, colour: [u8; 3]) -> Self {
        Self {
            mode_id: mode_id.into(),
            name: name.into(),
            theme: GameModeTheme::new(colour),
        }
    }
}

/// A game declared by the user in the `[[extra_game_modes]]` config section.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CustomGameMode {
    pub id: String,
    pub name: String,
    pub colour: Option<[u8; 3]>,
    pub icon: Option<PathBuf>,
}

const CUSTOM_COLOUR: [u8; 3] = [120, 120, 120];

impl From<&CustomGameMode> for GameModeDescriptor {
    fn from(custom: &CustomGameMode) -> Self {
        GameModeDescriptor {
            mode_id: custom.id.clone(),
            name: custom.name.clone(),
            theme: GameModeTheme {
                primary_colour: custom.colour.unwrap_or(CUSTOM_COLOUR),
                icon_path: custom.icon.clone(),
            },
        }
    }
}

pub fn builtin_game_modes() -> Vec<GameModeDescriptor> {
    vec![
        GameModeDescriptor::new("skyrim", "Skyrim", [88, 98, 112]),
        GameModeDescriptor::new("skyrimse", "Skyrim Special Edition", [150, 160, 175]),
        GameModeDescriptor::new("fallout3", "Fallout 3", [96, 140, 64]),
        GameModeDescriptor::new("falloutnv", "Fallout: New Vegas", [204, 120, 36]),
        GameModeDescriptor::new("fallout4", "Fallout 4", [40, 110, 170]),
        GameModeDescriptor::new("oblivion", "Oblivion", [150, 40, 40]),
        GameModeDescriptor::new("morrowind", "Morrowind", [140, 110, 70]),
        GameModeDescriptor::new("dragonage", "Dragon Age: Origins", [120, 20, 20]),
        GameModeDescriptor::new("dragonage2", "Dragon Age 2", [170, 30, 30]),
        GameModeDescriptor::new("witcher2", "The Witcher 2", [200, 180, 120]),
        GameModeDescriptor::new("worldoftanks", "World of Tanks", [110, 90, 50]),
        GameModeDescriptor::new("grimrock", "Legend of Grimrock", [70, 80, 60]),
    ]
}

/// The built-in catalog plus any custom games from the settings.
/// A custom game with the id of a known game replaces it, so ids stay unique.
pub fn load_game_modes(settings: &Settings) -> Vec<GameModeDescriptor> {
    let mut modes = builtin_game_modes();
    for custom in &settings.extra_game_modes {
        let descriptor = GameModeDescriptor::from(custom);
        match modes.iter_mut().find(|m| m.mode_id == descriptor.mode_id) {
            Some(existing) => {
                tracing::debug!(mode_id = %descriptor.mode_id, "Custom game mode replaces built-in");
                *existing = descriptor;
            }
            None => modes.push(descriptor),
        }
    }
    modes
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn custom(id: &str, name: &str) -> CustomGameMode {
        CustomGameMode {
            id: id.to_string(),
            name: name.to_string(),
            colour: None,
            icon: None,
        }
    }

    #[test]
    fn builtin_ids_are_unique() {
        let modes = builtin_game_modes();
        let ids: HashSet<&str> = modes.iter().map(|m| m.mode_id.as_str()).collect();

        assert_eq!(ids.len(), modes.len());
    }

    #[test]
    fn custom_modes_are_appended() {
        let settings = Settings {
            extra_game_modes: vec![custom("cyberpunk", "Cyberpunk 2077")],
            ..Default::default()
        };

        let modes = load_game_modes(&settings);

        assert_eq!(modes.len(), builtin_game_modes().len() + 1);
        let last = modes.last().unwrap();
        assert_eq!(last.mode_id, "cyberpunk");
        assert_eq!(last.theme.primary_colour, CUSTOM_COLOUR);
    }

    #[test]
    fn custom_mode_replaces_builtin_with_same_id() {
        let settings = Settings {
            extra_game_modes: vec![custom("skyrim", "Skyrim (modded)")],
            ..Default::default()
        };

        let modes = load_game_modes(&settings);

        assert_eq!(modes.len(), builtin_game_modes().len());
        let skyrim: Vec<_> = modes.iter().filter(|m| m.mode_id == "skyrim").collect();
        assert_eq!(skyrim.len(), 1);
        assert_eq!(skyrim[0].name, "Skyrim (modded)");
    }
}
