use std::path::{Path, PathBuf};

use image::{imageops::FilterType, Rgba, RgbaImage};

pub const ICON_SIZE: u32 = 32;
const BORDER: u32 = 2;
const DEFAULT_ICON_COLOUR: [u8; 3] = [218, 140, 42];

/// Raw RGBA pixels for a window icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameIcon {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl GameIcon {
    /// The application icon, shown until the user picks a game.
    pub fn default_icon() -> Self {
        swatch(DEFAULT_ICON_COLOUR)
    }

    fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            rgba: image.into_raw(),
            width,
            height,
        }
    }
}

impl From<GameIcon> for egui::viewport::IconData {
    fn from(icon: GameIcon) -> Self {
        egui::viewport::IconData {
            rgba: icon.rgba,
            width: icon.width,
            height: icon.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModeTheme {
    pub primary_colour: [u8; 3],
    pub icon_path: Option<PathBuf>,
}

impl GameModeTheme {
    pub fn new(primary_colour: [u8; 3]) -> Self {
        Self {
            primary_colour,
            icon_path: None,
        }
    }

    pub fn icon(&self) -> GameIcon {
        if let Some(path) = &self.icon_path {
            match load_icon(path) {
                Ok(icon) => return icon,
                Err(err) => tracing::warn!(
                    path = %path.display(),
                    "Could not load game icon, using colour instead: {err}"
                ),
            }
        }
        swatch(self.primary_colour)
    }

    pub fn colour(&self) -> egui::Color32 {
        let [r, g, b] = self.primary_colour;
        egui::Color32::from_rgb(r, g, b)
    }
}

fn load_icon(path: &Path) -> eyre::Result<GameIcon> {
    let image = image::open(path)?
        .resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Triangle)
        .to_rgba8();
    Ok(GameIcon::from_image(image))
}

fn swatch(colour: [u8; 3]) -> GameIcon {
    let [r, g, b] = colour;
    let fill = Rgba([r, g, b, 255]);
    let edge = Rgba([r / 2, g / 2, b / 2, 255]);
    let image = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let on_border = x < BORDER
            || y < BORDER
            || x >= ICON_SIZE - BORDER
            || y >= ICON_SIZE - BORDER;
        if on_border {
            edge
        } else {
            fill
        }
    });
    GameIcon::from_image(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_uses_the_theme_colour() {
        let icon = GameModeTheme::new([10, 20, 30]).icon();

        assert_eq!(icon.width, ICON_SIZE);
        assert_eq!(icon.height, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        let centre = ((ICON_SIZE / 2 * ICON_SIZE + ICON_SIZE / 2) * 4) as usize;
        assert_eq!(&icon.rgba[centre..centre + 4], &[10, 20, 30, 255]);
        assert_eq!(&icon.rgba[0..4], &[5, 10, 15, 255]);
    }

    #[test]
    fn different_colours_give_different_icons() {
        let a = GameModeTheme::new([10, 20, 30]).icon();
        let b = GameModeTheme::new([30, 20, 10]).icon();

        assert_ne!(a, b);
    }

    #[test]
    fn broken_icon_path_falls_back_to_colour() {
        let theme = GameModeTheme {
            primary_colour: [1, 2, 3],
            icon_path: Some(PathBuf::from("/does/not/exist.png")),
        };

        assert_eq!(theme.icon(), GameModeTheme::new([1, 2, 3]).icon());
    }

    #[test]
    fn icon_file_is_resized() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        RgbaImage::from_pixel(64, 48, Rgba([0, 255, 0, 255]))
            .save(&path)
            .unwrap();
        let theme = GameModeTheme {
            primary_colour: [1, 2, 3],
            icon_path: Some(path),
        };

        let icon = theme.icon();

        assert_eq!((icon.width, icon.height), (ICON_SIZE, ICON_SIZE));
        assert_eq!(&icon.rgba[0..4], &[0, 255, 0, 255]);
    }
}
