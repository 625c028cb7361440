//! The "Join Our Mission" block and the page footer.

use bevy_egui::egui::{self, Align, Color32, Layout, RichText, UiBuilder};
use chrono::Datelike;

use crate::page::CONTACT_ANCHOR;

use super::navbar::{brand_job, NAV_ITEMS};
use super::theme::{GRAY_300, GRAY_400, GREEN_700, GREEN_800, GREEN_900, GREEN_950};
use super::view::PageView;
use super::widgets::{AnimatedButton, ButtonSize, ButtonVariant};
use super::Links;

const CARD_MAX_WIDTH: f32 = 896.0;
const CARD_GAP: f32 = 32.0;

pub(super) fn draw_contact(ctx: &egui::Context, view: &PageView) {
    let Some(region) = view.layout.region(CONTACT_ANCHOR) else {
        return;
    };
    if !view.on_screen(region.top, region.height) {
        return;
    }
    let contact = &view.content.contact;
    let rect = egui::Rect::from_min_size(
        egui::pos2(0.0, view.screen_y(region.top)),
        egui::vec2(view.viewport.width, region.height),
    );

    egui::Area::new(egui::Id::new(CONTACT_ANCHOR))
        .fixed_pos(rect.min)
        .order(egui::Order::Background)
        .constrain(false)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::ZERO, GREEN_900);
            ui.set_min_size(rect.size());

            let width = CARD_MAX_WIDTH.min(rect.width() - 32.0);
            let card = egui::Rect::from_center_size(
                rect.center(),
                egui::vec2(width, (rect.height() - 160.0).max(0.0)),
            );
            ui.scope_builder(UiBuilder::new().max_rect(card), |ui| {
                egui::Frame::default()
                    .fill(GREEN_800.gamma_multiply(0.3))
                    .stroke(egui::Stroke::new(1.0, GREEN_700.gamma_multiply(0.5)))
                    .inner_margin(egui::Margin::same(48))
                    .corner_radius(egui::CornerRadius::same(12))
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&contact.heading).size(44.0).strong());
                            ui.add_space(16.0);
                            ui.label(RichText::new(&contact.blurb).size(20.0));
                        });
                        ui.add_space(32.0);

                        let card_width = (ui.available_width() - CARD_GAP) / 2.0;
                        ui.horizontal_top(|ui| {
                            for (index, item) in contact.cards.iter().enumerate() {
                                let variant = if index % 2 == 0 {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Secondary
                                };
                                ui.allocate_ui(egui::vec2(card_width, 0.0), |ui| {
                                    contact_card(ui, &item.title, &item.body, &item.action, variant);
                                });
                                ui.add_space(CARD_GAP);
                            }
                        });
                        ui.add_space(48.0);

                        ui.vertical_centered(|ui| {
                            ui.add(
                                AnimatedButton::new(&contact.programs_link)
                                    .variant(ButtonVariant::Outline)
                                    .size(ButtonSize::Lg),
                            );
                        });
                    });
            });
        });
}

fn contact_card(ui: &mut egui::Ui, title: &str, body: &str, action: &str, variant: ButtonVariant) {
    egui::Frame::default()
        .fill(GREEN_900.gamma_multiply(0.5))
        .stroke(egui::Stroke::new(1.0, GREEN_800.gamma_multiply(0.5)))
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(title).size(26.0).strong());
            ui.add_space(12.0);
            ui.label(body);
            ui.add_space(20.0);
            let width = ui.available_width();
            ui.add(
                AnimatedButton::new(action)
                    .variant(variant)
                    .size(ButtonSize::Lg)
                    .min_width(width),
            );
        });
}

pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("\u{a9} {year} {brand}. All rights reserved.")
}

pub(super) fn draw_footer(ctx: &egui::Context, view: &PageView, links: &mut Links) {
    let top = view.layout.footer_top();
    let height = view.layout.document_height - top;
    if !view.on_screen(top, height) {
        return;
    }
    let footer = &view.content.footer;
    let rect = egui::Rect::from_min_size(
        egui::pos2(0.0, view.screen_y(top)),
        egui::vec2(view.viewport.width, height),
    );

    egui::Area::new(egui::Id::new("footer"))
        .fixed_pos(rect.min)
        .order(egui::Order::Background)
        .constrain(false)
        .show(ctx, |ui| {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::ZERO, GREEN_950);
            ui.set_min_size(rect.size());

            let inner = rect.shrink2(egui::vec2(64.0, 48.0));
            ui.scope_builder(
                UiBuilder::new()
                    .max_rect(inner)
                    .layout(Layout::top_down(Align::Min)),
                |ui| {
                    ui.columns(3, |columns| {
                        columns[0].label(brand_job(&footer.brand_highlight, &footer.brand_rest, 20.0));
                        columns[0].add_space(12.0);
                        columns[0].label(RichText::new(&footer.blurb).color(GRAY_300));

                        columns[1].label(RichText::new("Quick Links").size(20.0).strong());
                        columns[1].add_space(12.0);
                        for (label, href) in NAV_ITEMS {
                            let link = columns[1].add(
                                egui::Button::new(RichText::new(label).color(GRAY_300))
                                    .frame(false),
                            );
                            if link.clicked() {
                                links.follow(href);
                            }
                        }

                        columns[2].label(RichText::new("Connect With Us").size(20.0).strong());
                        columns[2].add_space(12.0);
                        columns[2].horizontal(|ui| {
                            for social in &footer.socials {
                                social_badge(ui, social);
                            }
                        });
                    });

                    ui.add_space(32.0);
                    ui.separator();
                    ui.vertical_centered(|ui| {
                        let year = chrono::Local::now().year();
                        let brand = format!("{}{}", footer.brand_highlight, footer.brand_rest);
                        ui.label(RichText::new(copyright_line(year, &brand)).color(GRAY_400));
                    });
                },
            );
        });
}

/// Round placeholder for a social network icon.
fn social_badge(ui: &mut egui::Ui, name: &str) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
    let fill = if response.hovered() { GREEN_700 } else { GREEN_800 };
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 20.0, fill);
    let initial: String = name.chars().take(1).collect();
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initial,
        egui::FontId::proportional(14.0),
        Color32::WHITE,
    );
    response.on_hover_text(name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_the_year_and_brand() {
        assert_eq!(
            copyright_line(2031, "ForestSustain"),
            "\u{a9} 2031 ForestSustain. All rights reserved."
        );
    }

    #[test]
    fn footer_links_cover_every_anchor() {
        let anchors: Vec<&str> = NAV_ITEMS
            .iter()
            .map(|(_, href)| href.trim_start_matches('#'))
            .collect();
        assert_eq!(
            anchors,
            ["home", "about", "sustainability", "gallery", CONTACT_ANCHOR]
        );
    }
}
