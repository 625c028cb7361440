//! Page palette.

use bevy_egui::egui::Color32;

pub const GREEN_950: Color32 = Color32::from_rgb(5, 46, 22);
pub const GREEN_900: Color32 = Color32::from_rgb(20, 83, 45);
pub const GREEN_800: Color32 = Color32::from_rgb(22, 101, 52);
pub const GREEN_700: Color32 = Color32::from_rgb(21, 128, 61);
pub const GREEN_600: Color32 = Color32::from_rgb(22, 163, 74);
pub const GREEN_500: Color32 = Color32::from_rgb(34, 197, 94);
pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const AMBER_600: Color32 = Color32::from_rgb(217, 119, 6);
pub const AMBER_500: Color32 = Color32::from_rgb(245, 158, 11);
pub const GRAY_200: Color32 = Color32::from_rgb(229, 231, 235);
pub const GRAY_300: Color32 = Color32::from_rgb(209, 213, 219);
pub const GRAY_400: Color32 = Color32::from_rgb(156, 163, 175);

/// Clear colour behind the scene and the page, as a Bevy colour.
pub fn clear_color() -> bevy::prelude::Color {
    let [r, g, b, _] = GREEN_950.to_array();
    bevy::prelude::Color::srgb_u8(r, g, b)
}
