pub mod ui_colors {
    use egui::Color32;

    pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x1B, 0x1F, 0x2B);
    pub const EXTRA_BACKGROUND_COLOR: Color32 = Color32::from_rgb(0x0F, 0x12, 0x1A);
    pub const BG_STROKE_COLOR: Color32 = Color32::from_rgb(0x32, 0x36, 0x45);
    pub const TEXT_COLOR: Color32 = Color32::from_rgb(0xE6, 0xE6, 0xE6);
    pub const ORANGE: Color32 = Color32::from_rgb(0xDA, 0x8C, 0x2A);
    pub const LIGHT_ORANGE: Color32 = Color32::from_rgb(0xF0, 0xB0, 0x60);
    pub const PURPLE: Color32 = Color32::from_rgb(0x4A, 0x3A, 0x7A);
    pub const ERROR_COLOR: Color32 = Color32::from_rgb(0xE0, 0x4A, 0x4A);
}
