use bevy_egui::egui::{
    self, text::LayoutJob, Align, Color32, FontId, Layout, RichText, TextFormat, UiBuilder,
};

use super::theme::{GREEN_400, GREEN_950};
use super::view::PageView;
use super::Links;

pub const NAVBAR_HEIGHT: f32 = 64.0;
/// Anchor links shown in the navbar and the footer.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Sustainability", "#sustainability"),
    ("Gallery", "#gallery"),
    ("Contact", "#contact"),
];

pub(super) fn draw(ctx: &egui::Context, view: &PageView, links: &mut Links) {
    let solid = ctx.animate_bool_with_time(egui::Id::new("navbar-solid"), view.navbar_solid, 0.3);
    let footer = &view.content.footer;

    egui::Area::new(egui::Id::new("navbar"))
        .fixed_pos(egui::Pos2::ZERO)
        .order(egui::Order::Foreground)
        .constrain(false)
        .show(ctx, |ui| {
            let rect = egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(view.viewport.width, NAVBAR_HEIGHT),
            );
            ui.painter().rect_filled(
                rect,
                egui::CornerRadius::ZERO,
                GREEN_950.gamma_multiply(0.9 * solid),
            );

            let inner = rect.shrink2(egui::vec2(32.0, 0.0));
            ui.scope_builder(
                UiBuilder::new()
                    .max_rect(inner)
                    .layout(Layout::left_to_right(Align::Center)),
                |ui| {
                    let brand = ui.add(
                        egui::Button::new(brand_job(
                            &footer.brand_highlight,
                            &footer.brand_rest,
                            24.0,
                        ))
                        .frame(false),
                    );
                    if brand.clicked() {
                        links.follow("#home");
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        for (label, href) in NAV_ITEMS.iter().rev() {
                            let active = href.trim_start_matches('#') == view.active_anchor;
                            let color = if active { GREEN_400 } else { Color32::WHITE };
                            let item = ui.add(
                                egui::Button::new(RichText::new(*label).size(16.0).color(color))
                                    .frame(false),
                            );
                            if item.clicked() {
                                links.follow(href);
                            }
                            ui.add_space(12.0);
                        }
                    });
                },
            );
        });
}

/// The two-tone wordmark: highlight in green, the rest in white.
pub(super) fn brand_job(highlight: &str, rest: &str, size: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    let format = TextFormat {
        font_id: FontId::proportional(size),
        color: GREEN_400,
        ..Default::default()
    };
    job.append(highlight, 0.0, format.clone());
    job.append(
        rest,
        0.0,
        TextFormat {
            color: Color32::WHITE,
            ..format
        },
    );
    job
}
