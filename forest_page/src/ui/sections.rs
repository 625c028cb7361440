//! Parallax content sections: a revealed text column beside a scroll-linked
//! image column.

use bevy_egui::egui::{self, load::SizedTexture, Align, Color32, Layout, RichText, UiBuilder};

use super::images::ImageStatus;
use super::revealed;
use super::theme::{GRAY_200, GREEN_400, GREEN_700, GREEN_800, GREEN_900, GREEN_950};
use super::view::{PageView, SectionView};

const MARGIN: egui::Vec2 = egui::vec2(64.0, 80.0);
const COLUMN_GAP: f32 = 48.0;
const MAX_IMAGE_HEIGHT: f32 = 500.0;

/// Draws every on-screen section. `textures[i]` is the loaded picture of
/// `view.sections[i]`, if any.
pub(super) fn draw(ctx: &egui::Context, view: &PageView, textures: &[Option<egui::TextureId>]) {
    let document = view.layout.document_height.max(1.0);
    for (index, section) in view.sections.iter().enumerate() {
        let region = section.region;
        if !view.on_screen(region.top, region.height) {
            continue;
        }
        let rect = egui::Rect::from_min_size(
            egui::pos2(0.0, view.screen_y(region.top)),
            egui::vec2(view.viewport.width, region.height),
        );
        let background = GREEN_950.lerp_to_gamma(GREEN_900, region.top / document);
        let texture = textures.get(index).copied().flatten();

        egui::Area::new(egui::Id::new(("section", &section.props.id)))
            .fixed_pos(rect.min)
            .order(egui::Order::Background)
            .constrain(false)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(rect, egui::CornerRadius::ZERO, background);
                ui.set_min_size(rect.size());

                let content = rect.shrink2(MARGIN);
                let half = (content.width() - COLUMN_GAP) / 2.0;
                let left = egui::Rect::from_min_size(
                    content.min,
                    egui::vec2(half, content.height()),
                );
                let right = left.translate(egui::vec2(half + COLUMN_GAP, 0.0));
                let (text_rect, image_rect) = if section.props.reverse {
                    (right, left)
                } else {
                    (left, right)
                };

                ui.scope_builder(
                    UiBuilder::new()
                        .max_rect(text_rect)
                        .layout(Layout::top_down(Align::Min)),
                    |ui| text_column(ui, section),
                );
                image_column(ui, section, image_rect, texture);
            });
    }
}

fn text_column(ui: &mut egui::Ui, section: &SectionView) {
    ui.multiply_opacity(section.opacity);
    ui.add_space(ui.available_height() * 0.12);
    revealed(ui, section.title, |ui| {
        ui.label(
            RichText::new(&section.props.title)
                .size(48.0)
                .strong()
                .color(Color32::WHITE),
        );
    });
    revealed(ui, section.description, |ui| {
        ui.label(
            RichText::new(&section.props.description)
                .size(20.0)
                .color(GRAY_200),
        );
    });

    let Some(fact) = section.fact else {
        return;
    };
    revealed(ui, fact, |ui| {
        egui::Frame::default()
            .fill(GREEN_800.gamma_multiply(0.8))
            .stroke(egui::Stroke::new(1.0, GREEN_700.gamma_multiply(0.5)))
            .inner_margin(egui::Margin::same(24))
            .corner_radius(egui::CornerRadius::same(8))
            .show(ui, |ui| {
                if let Some(number) = &section.props.fact_number {
                    ui.label(
                        RichText::new(number)
                            .size(44.0 * fact.scale)
                            .strong()
                            .color(GREEN_400),
                    );
                }
                if let Some(text) = &section.props.fact_text {
                    ui.label(
                        RichText::new(text)
                            .size(18.0 * fact.scale)
                            .color(Color32::WHITE),
                    );
                }
            });
    });
}

fn image_column(
    ui: &mut egui::Ui,
    section: &SectionView,
    column: egui::Rect,
    texture: Option<egui::TextureId>,
) {
    let height = column.height().min(MAX_IMAGE_HEIGHT);
    let frame = egui::Rect::from_center_size(column.center(), egui::vec2(column.width(), height));
    let image = frame.translate(egui::vec2(0.0, section.image_y));

    let hover = ui.interact(
        frame,
        egui::Id::new(("section-image", &section.props.id)),
        egui::Sense::hover(),
    );
    hover.on_hover_text(&section.props.image_alt);

    let ready = section
        .image
        .is_some_and(|image| image.status == ImageStatus::Ready);
    let (Some(texture), true) = (texture, ready) else {
        return;
    };
    let mut clipped = ui.new_child(
        UiBuilder::new()
            .max_rect(frame)
            .layout(Layout::top_down(Align::Min)),
    );
    clipped.set_clip_rect(frame.intersect(ui.clip_rect()));
    egui::Image::new(SizedTexture::new(texture, image.size()))
        .corner_radius(egui::CornerRadius::same(8))
        .tint(Color32::WHITE.gamma_multiply(section.opacity))
        .paint_at(&clipped, image);
}
