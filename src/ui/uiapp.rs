use std::sync::Arc;

use eframe::{egui, App, Frame};
use egui::{Rounding, Stroke, ViewportCommand};
use tokio::sync::watch::{self, Sender};

use crate::{
    game_modes::{GameIcon, GameModeDescriptor},
    settings::SettingsStore,
};

use super::{
    ui_colors::{
        BACKGROUND_COLOR, BG_STROKE_COLOR, EXTRA_BACKGROUND_COLOR, LIGHT_ORANGE, ORANGE, PURPLE,
        TEXT_COLOR,
    },
    DialogResult, GameModeSelectionDialog,
};

const WINDOW_TITLE: &str = "Select Game";
const WINDOW_SIZE: [f32; 2] = [380.0, 420.0];

pub struct GameSelectApp<S: SettingsStore> {
    dialog: GameModeSelectionDialog<S>,
    selected: Sender<Option<String>>,
    save_error: Option<String>,
    finished: bool,
}

impl<S: SettingsStore> GameSelectApp<S> {
    pub fn new(dialog: GameModeSelectionDialog<S>, selected: Sender<Option<String>>) -> Self {
        Self {
            dialog,
            selected,
            save_error: None,
            finished: false,
        }
    }

    /// Returns the final result the first time the dialog has one,
    /// publishing the accepted id on the way.
    fn finish(&mut self) -> Option<DialogResult> {
        if self.finished {
            return None;
        }
        let result = self.dialog.result();
        match result {
            DialogResult::None => return None,
            DialogResult::Ok => {
                let mode_id = self.dialog.selected_game_mode_id().to_string();
                if self.selected.send(Some(mode_id)).is_err() {
                    tracing::warn!("Nobody is waiting for the selected game");
                }
            }
            DialogResult::Cancelled => {}
        }
        self.finished = true;
        Some(result)
    }
}

impl<S: SettingsStore> App for GameSelectApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = self.dialog.render(ui, self.save_error.as_deref()) {
                if let Err(err) = self.dialog.handle_action(action) {
                    tracing::error!("Failed to save settings: {err:?}");
                    self.save_error = Some(format!("Could not save settings: {err}"));
                }
            }
        });

        if self.dialog.take_icon_changed() {
            let icon: egui::viewport::IconData = self.dialog.icon().clone().into();
            ctx.send_viewport_cmd(ViewportCommand::Icon(Some(Arc::new(icon))));
        }

        if self.finish().is_some() {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

pub struct UiOptions {
    pub vsync: bool,
}

/// Shows the dialog and blocks until the window closes.
/// Returns the accepted game mode id, or `None` if the user did not accept.
pub fn run_ui<S>(
    game_modes: &[GameModeDescriptor],
    settings: S,
    options: UiOptions,
) -> eyre::Result<Option<String>>
where
    S: SettingsStore + 'static,
{
    let dialog = GameModeSelectionDialog::new(game_modes, settings)?;
    let (tx, rx) = watch::channel(None);
    let app = GameSelectApp::new(dialog, tx);

    let icon: egui::viewport::IconData = GameIcon::default_icon().into();
    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(WINDOW_SIZE)
        .with_resizable(false)
        .with_icon(icon);
    let native_options = eframe::NativeOptions {
        viewport,
        vsync: options.vsync,
        ..Default::default()
    };
    let run_result = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(|cc| {
            setup(&cc.egui_ctx);
            Box::new(app)
        }),
    );
    run_result.map_err(|e| eyre::eyre!("Could not initialize: {:?}", e))?;

    let selected = rx.borrow().clone();
    Ok(selected)
}

fn create_style(style: &mut egui::Style) {
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BACKGROUND_COLOR;
    style.visuals.override_text_color = Some(TEXT_COLOR);
    style.visuals.widgets.noninteractive.rounding = Rounding::ZERO;
    style.visuals.faint_bg_color = PURPLE;
    style.visuals.extreme_bg_color = EXTRA_BACKGROUND_COLOR;
    style.visuals.widgets.active.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.active.bg_stroke = Stroke::new(2.0, BG_STROKE_COLOR);
    style.visuals.widgets.active.fg_stroke = Stroke::new(2.0, LIGHT_ORANGE);
    style.visuals.widgets.noninteractive.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BG_STROKE_COLOR);
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_COLOR);
    style.visuals.widgets.inactive.bg_fill = EXTRA_BACKGROUND_COLOR;
    style.visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BG_STROKE_COLOR);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(2.0, ORANGE);
    style.visuals.widgets.hovered.bg_fill = BACKGROUND_COLOR;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, BG_STROKE_COLOR);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(2.0, LIGHT_ORANGE);
    style.visuals.selection.bg_fill = PURPLE;
}

fn setup(ctx: &egui::Context) {
    let mut style: egui::Style = (*ctx.style()).clone();
    create_style(&mut style);
    ctx.set_style(style);
}
