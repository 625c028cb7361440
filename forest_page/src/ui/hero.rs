//! Hero copy over the 3D scene, and the bouncing scroll indicator.

use bevy_egui::egui::{self, text::LayoutJob, Align, Color32, FontId, RichText, TextFormat};

use super::theme::{GRAY_200, GREEN_400};
use super::view::PageView;
use super::widgets::{AnimatedButton, ButtonSize, ButtonVariant};
use super::{revealed, Links};

const TITLE_SIZE: f32 = 64.0;
const BUTTON_ROW_WIDTH: f32 = 300.0;
const INDICATOR_FROM_BOTTOM: f32 = 96.0;

pub(super) fn draw(ctx: &egui::Context, view: &PageView, links: &mut Links) {
    let Some(region) = view.layout.region(crate::page::HOME_ANCHOR) else {
        return;
    };
    if !view.on_screen(region.top, region.height) {
        return;
    }
    let hero = &view.content.hero;
    let top = view.screen_y(region.top);
    let width = view.viewport.width;

    egui::Area::new(egui::Id::new("hero"))
        .fixed_pos(egui::pos2(0.0, top))
        .order(egui::Order::Background)
        .constrain(false)
        .show(ctx, |ui| {
            ui.set_min_size(egui::vec2(width, region.height));
            ui.set_max_width(width);
            ui.vertical_centered(|ui| {
                ui.add_space(region.height * 0.28);

                revealed(ui, view.hero.title, |ui| {
                    ui.label(title_job(
                        &hero.title_lead,
                        &hero.title_highlight,
                        &hero.title_tail,
                    ));
                });
                revealed(ui, view.hero.subtitle, |ui| {
                    ui.set_max_width(680.0);
                    ui.label(RichText::new(&hero.subtitle).size(22.0).color(GRAY_200));
                });
                revealed(ui, view.hero.buttons, |ui| {
                    ui.horizontal(|ui| {
                        ui.add_space(((ui.available_width() - BUTTON_ROW_WIDTH) / 2.0).max(0.0));
                        let explore = ui.add(AnimatedButton::new("Explore").size(ButtonSize::Lg));
                        if explore.clicked() {
                            links.follow("#about");
                        }
                        ui.add_space(16.0);
                        let learn = ui.add(
                            AnimatedButton::new("Learn More")
                                .variant(ButtonVariant::Outline)
                                .size(ButtonSize::Lg),
                        );
                        if learn.clicked() {
                            links.follow("#sustainability");
                        }
                    });
                });
            });

            scroll_indicator(
                ui,
                egui::pos2(width / 2.0, top + region.height - INDICATOR_FROM_BOTTOM),
                view.hero.indicator_opacity,
                view.hero.indicator_bounce,
            );
        });
}

fn title_job(lead: &str, highlight: &str, tail: &str) -> LayoutJob {
    let plain = TextFormat {
        font_id: FontId::proportional(TITLE_SIZE),
        color: Color32::WHITE,
        ..Default::default()
    };
    let mut job = LayoutJob {
        halign: Align::Center,
        ..Default::default()
    };
    job.append(lead, 0.0, plain.clone());
    job.append(
        highlight,
        TITLE_SIZE * 0.25,
        TextFormat {
            color: GREEN_400,
            ..plain.clone()
        },
    );
    job.append(&format!("\n{tail}"), 0.0, plain);
    job
}

/// "Scroll Down" over a mouse outline whose wheel dot bounces by `bounce`.
fn scroll_indicator(ui: &egui::Ui, center_top: egui::Pos2, opacity: f32, bounce: f32) {
    let painter = ui.painter();
    let white = Color32::WHITE.gamma_multiply(opacity);
    painter.text(
        center_top,
        egui::Align2::CENTER_TOP,
        "Scroll Down",
        FontId::proportional(14.0),
        white,
    );
    let mouse = egui::Rect::from_center_size(
        center_top + egui::vec2(0.0, 44.0),
        egui::vec2(24.0, 40.0),
    );
    painter.rect_stroke(
        mouse,
        egui::CornerRadius::same(12),
        egui::Stroke::new(2.0, white),
        egui::StrokeKind::Inside,
    );
    let dot = egui::Rect::from_center_size(
        egui::pos2(mouse.center().x, mouse.top() + 10.0 + bounce),
        egui::vec2(6.0, 12.0),
    );
    painter.rect_filled(dot, egui::CornerRadius::same(3), white);
}
