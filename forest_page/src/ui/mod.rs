//! The page overlay: navbar, hero copy, parallax sections, contact and
//! footer, drawn with egui over the 3D scene and offset by the virtual
//! scroll position.

mod contact;
mod hero;
mod images;
mod navbar;
mod sections;
pub mod theme;
mod view;
mod widgets;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

pub use contact::copyright_line;
pub use images::{ImageStatus, SectionImage};
pub use navbar::{NAVBAR_HEIGHT, NAV_ITEMS};
pub use view::{navbar_solid, HeroView, PageQueries, PageView, SectionView, NAVBAR_SOLID_AFTER_PX};
pub use widgets::{
    target_scale, AnimatedButton, ButtonSize, ButtonStyle, ButtonVariant, HOVER_SCALE,
    PRESS_SCALE, SCALE_ANIMATION_SECS,
};

use crate::frame::FrameSet;
use crate::scroll::ScrollRequest;
use crate::timeline::VisualState;

/// Largest vertical travel of a revealed element.
const REVEAL_TRAVEL: f32 = 50.0;

pub fn page_ui_plugin(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin);
    }
    app.add_systems(
        Update,
        (images::load_section_images, images::watch_section_images)
            .chain()
            .in_set(FrameSet::Input),
    )
    .add_systems(Update, page_ui_system.in_set(FrameSet::Present));
}

/// Anchor links clicked this frame.
#[derive(Debug, Default)]
pub(crate) struct Links(Vec<String>);

impl Links {
    pub(crate) fn follow(&mut self, href: &str) {
        self.0.push(href.to_string());
    }
}

/// Draws `add` faded to `state.opacity` and pushed down by `state.offset_y`,
/// keeping the same footprint whatever the offset.
pub(crate) fn revealed<R>(
    ui: &mut egui::Ui,
    state: VisualState,
    add: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let shift = state.offset_y.clamp(0.0, REVEAL_TRAVEL);
    ui.scope(|ui| {
        ui.multiply_opacity(state.opacity);
        ui.add_space(shift);
        let inner = add(ui);
        ui.add_space(REVEAL_TRAVEL - shift);
        inner
    })
    .inner
}

fn page_ui_system(
    mut contexts: EguiContexts,
    pages: PageQueries,
    mut requests: EventWriter<ScrollRequest>,
) {
    let Some(view) = pages.view() else {
        return;
    };
    let textures: Vec<Option<egui::TextureId>> = view
        .sections
        .iter()
        .map(|section| {
            section
                .image
                .filter(|image| image.status == ImageStatus::Ready)
                .map(|image| contexts.add_image(image.handle.clone_weak()))
        })
        .collect();
    let Some(ctx) = contexts.try_ctx_mut() else {
        return;
    };

    let mut links = Links::default();
    hero::draw(ctx, &view, &mut links);
    sections::draw(ctx, &view, &textures);
    contact::draw_contact(ctx, &view);
    contact::draw_footer(ctx, &view, &mut links);
    navbar::draw(ctx, &view, &mut links);

    for href in links.0 {
        debug!("navigating to {href}");
        requests.send(ScrollRequest::anchor_link(&href));
    }
}
