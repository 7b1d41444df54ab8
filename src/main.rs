mod config;
mod game_modes;
mod logging;
mod settings;
mod ui;

use crate::{
    game_modes::{load_game_modes, GameModeDescriptor},
    settings::{Settings, SettingsStore},
    ui::{run_ui, UiOptions},
};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = logging::init_logging();

    let args: Vec<String> = std::env::args().collect();
    let mut settings = match config_arg(&args) {
        Some(path) => Settings::load_from(path)?,
        None => Settings::new()?,
    };
    tracing::debug!(path = %settings.path().display(), "Loaded settings");
    let game_modes = load_game_modes(&settings);

    if args.contains(&"--list".to_string()) {
        for game_mode in &game_modes {
            println!("{}\t{}", game_mode.mode_id, game_mode.name);
        }
        return Ok(());
    }

    if args.contains(&"--reset".to_string()) {
        tracing::info!("Forgetting remembered game");
        settings.forget_game_mode();
        settings.save()?;
    }

    let always_select = args.contains(&"--select".to_string());
    let mode_id = match remembered_game_mode(&game_modes, &settings) {
        Some(mode_id) if !always_select => {
            tracing::info!(mode_id = %mode_id, "Using remembered game");
            Some(mode_id.to_string())
        }
        _ => {
            let options = UiOptions {
                vsync: !args.contains(&"--no-vsync".to_string()),
            };
            run_ui(&game_modes, settings, options)?
        }
    };

    match mode_id {
        Some(mode_id) => {
            println!("{mode_id}");
            Ok(())
        }
        None => Err(eyre::eyre!("No game mode selected")),
    }
}

fn config_arg(args: &[String]) -> Option<&str> {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// The remembered game, if the user asked for it to be remembered
/// and it is still one of the known games.
fn remembered_game_mode<'a, S: SettingsStore>(
    game_modes: &'a [GameModeDescriptor],
    settings: &S,
) -> Option<&'a str> {
    if !settings.remember_game_mode() {
        return None;
    }
    game_modes
        .iter()
        .find(|m| m.mode_id == settings.remembered_game_mode())
        .map(|m| m.mode_id.as_str())
}

#[cfg(test)]
mod tests {
    use crate::settings::tests::MemorySettings;

    use super::*;

    fn modes() -> Vec<GameModeDescriptor> {
        vec![
            GameModeDescriptor::new("skyrim", "Skyrim", [0, 0, 0]),
            GameModeDescriptor::new("fallout3", "Fallout 3", [0, 0, 0]),
        ]
    }

    #[test]
    fn remembered_game_skips_dialog() {
        let settings = MemorySettings::remembering("skyrim");

        assert_eq!(remembered_game_mode(&modes(), &settings), Some("skyrim"));
    }

    #[test]
    fn remembered_id_without_flag_is_ignored() {
        let settings = MemorySettings {
            remember: false,
            remembered: "skyrim".to_string(),
            ..Default::default()
        };

        assert_eq!(remembered_game_mode(&modes(), &settings), None);
    }

    #[test]
    fn unknown_remembered_game_is_ignored() {
        let settings = MemorySettings::remembering("morrowind");

        assert_eq!(remembered_game_mode(&modes(), &settings), None);
    }

    #[test]
    fn reads_config_path() {
        let args: Vec<String> = ["gameselect", "--config", "my.toml", "--select"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert_eq!(config_arg(&args), Some("my.toml"));
        assert_eq!(config_arg(&args[..1]), None);
    }
}
