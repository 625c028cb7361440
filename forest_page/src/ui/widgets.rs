//! Call-to-action buttons with an animated hover and press scale.

use bevy_egui::egui::{self, Color32, CornerRadius, Sense, Stroke, StrokeKind, Vec2};

use super::theme::{AMBER_500, AMBER_600, GREEN_500, GREEN_600};

pub const HOVER_SCALE: f32 = 1.05;
pub const PRESS_SCALE: f32 = 0.95;
pub const SCALE_ANIMATION_SECS: f32 = 0.2;
const DISABLED_OPACITY: f32 = 0.5;
const BORDER_WIDTH: f32 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonStyle {
    pub fill: Color32,
    pub hover_fill: Color32,
    pub text: Color32,
    pub border: Color32,
    pub padding: Vec2,
    pub font_size: f32,
}

impl ButtonStyle {
    pub fn resolve(variant: ButtonVariant, size: ButtonSize) -> Self {
        let (padding, font_size) = match size {
            ButtonSize::Sm => (Vec2::new(12.0, 6.0), 14.0),
            ButtonSize::Md => (Vec2::new(16.0, 8.0), 16.0),
            ButtonSize::Lg => (Vec2::new(24.0, 12.0), 18.0),
        };
        let (fill, hover_fill, text, border) = match variant {
            ButtonVariant::Primary => (GREEN_500, GREEN_600, Color32::WHITE, Color32::TRANSPARENT),
            ButtonVariant::Secondary => (AMBER_500, AMBER_600, Color32::WHITE, Color32::TRANSPARENT),
            ButtonVariant::Outline => (
                Color32::TRANSPARENT,
                GREEN_500.gamma_multiply(0.1),
                GREEN_500,
                GREEN_500,
            ),
            ButtonVariant::Ghost => (
                Color32::TRANSPARENT,
                Color32::WHITE.gamma_multiply(0.1),
                Color32::WHITE,
                Color32::TRANSPARENT,
            ),
        };
        Self {
            fill,
            hover_fill,
            text,
            border,
            padding,
            font_size,
        }
    }
}

/// Scale a button eases toward. Disabled buttons never react.
pub fn target_scale(hovered: bool, pressed: bool, enabled: bool) -> f32 {
    match (enabled, pressed, hovered) {
        (false, _, _) => 1.0,
        (true, true, _) => PRESS_SCALE,
        (true, false, true) => HOVER_SCALE,
        (true, false, false) => 1.0,
    }
}

#[must_use = "add it to a `Ui` with `ui.add(..)`"]
pub struct AnimatedButton<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    enabled: bool,
    min_width: f32,
}

impl<'a> AnimatedButton<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            enabled: true,
            min_width: 0.0,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Stretch to at least `width`, e.g. the full width of a card.
    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = width;
        self
    }
}

impl egui::Widget for AnimatedButton<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let style = ButtonStyle::resolve(self.variant, self.size);
        let galley = egui::WidgetText::from(
            egui::RichText::new(self.label)
                .size(style.font_size)
                .strong(),
        )
        .into_galley(
            ui,
            Some(egui::TextWrapMode::Extend),
            f32::INFINITY,
            egui::TextStyle::Button,
        );

        let mut size = galley.size() + style.padding * 2.0;
        size.x = size.x.max(self.min_width);
        let sense = if self.enabled {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        let hovered = response.hovered();
        let scale = ui.ctx().animate_value_with_time(
            response.id.with("scale"),
            target_scale(hovered, response.is_pointer_button_down_on(), self.enabled),
            SCALE_ANIMATION_SECS,
        );

        if ui.is_rect_visible(rect) {
            let opacity = if self.enabled { 1.0 } else { DISABLED_OPACITY };
            let drawn = egui::Rect::from_center_size(rect.center(), rect.size() * scale);
            let fill = if hovered && self.enabled {
                style.hover_fill
            } else {
                style.fill
            };
            let painter = ui.painter();
            painter.rect(
                drawn,
                CornerRadius::same(6),
                fill.gamma_multiply(opacity),
                Stroke::new(BORDER_WIDTH, style.border.gamma_multiply(opacity)),
                StrokeKind::Inside,
            );
            let text_pos = drawn.center() - galley.size() * 0.5;
            painter.galley(text_pos, galley, style.text.gamma_multiply(opacity));
        }

        if self.enabled {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        } else {
            response.on_hover_cursor(egui::CursorIcon::NotAllowed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_grows_and_press_shrinks() {
        assert_eq!(target_scale(false, false, true), 1.0);
        assert_eq!(target_scale(true, false, true), HOVER_SCALE);
        assert_eq!(target_scale(true, true, true), PRESS_SCALE);
    }

    #[test]
    fn disabled_buttons_stay_still() {
        assert_eq!(target_scale(true, false, false), 1.0);
        assert_eq!(target_scale(true, true, false), 1.0);
    }

    #[test]
    fn sizes_scale_padding_and_text() {
        let sm = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Sm);
        let md = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Md);
        let lg = ButtonStyle::resolve(ButtonVariant::Primary, ButtonSize::Lg);
        assert!(sm.font_size < md.font_size && md.font_size < lg.font_size);
        assert!(sm.padding.x < md.padding.x && md.padding.x < lg.padding.x);
    }

    #[test]
    fn only_outline_draws_a_border() {
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Ghost,
        ] {
            let style = ButtonStyle::resolve(variant, ButtonSize::Md);
            assert_eq!(style.border, Color32::TRANSPARENT);
        }
        let outline = ButtonStyle::resolve(ButtonVariant::Outline, ButtonSize::Md);
        assert_eq!(outline.border, GREEN_500);
        assert_eq!(outline.fill, Color32::TRANSPARENT);
    }

    #[test]
    fn button_lays_out_in_a_headless_context() {
        let ctx = egui::Context::default();
        let mut clicked = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let response = ui.add(
                    AnimatedButton::new("Explore")
                        .size(ButtonSize::Lg)
                        .min_width(200.0),
                );
                assert!(response.rect.width() >= 200.0);
                clicked = response.clicked();
            });
        });
        assert!(!clicked);
    }
}
