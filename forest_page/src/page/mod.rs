//! Page view: the root entity that owns scroll context, layout, content
//! sections and their trigger registrations.

mod layout;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub use layout::{PageLayout, Region, Viewport, CONTACT_ANCHOR, FOOTER_HEIGHT, HOME_ANCHOR};

use crate::content::{PageContent, SectionProps};
use crate::frame::FrameSet;
use crate::scroll::{ScrollEmulator, ScrollSettings};
use crate::timeline::{
    hero_text_tween, scroll_indicator_bounce_tween, scroll_indicator_fade_tween,
    section_fact_trigger, section_fact_tween, section_text_trigger, section_text_tween, Repeat,
    RevealSlot, Timeline,
};

/// Marker for a page-view root. Carries [`ScrollEmulator`], [`PageLayout`]
/// and [`PageContent`].
#[derive(Component, Debug, Default)]
pub struct PageRoot;

/// Marker for the hero region. Its autoplay timelines are children.
#[derive(Component, Debug)]
pub struct Hero;

/// A parallax content section, child of a page root.
#[derive(Component, Clone, Debug)]
pub struct Section {
    pub props: SectionProps,
}

impl Section {
    pub fn anchor(&self) -> &str {
        &self.props.id
    }
}

/// Spawns a page view and every registration it owns. Returns the root.
pub fn spawn_page(
    commands: &mut Commands,
    content: PageContent,
    viewport: Viewport,
    settings: ScrollSettings,
) -> Entity {
    let layout = PageLayout::measure(&content, viewport);
    let mut emulator = ScrollEmulator::new(settings);
    emulator.resize(layout.scroll_limit());
    let sections = content.sections.clone();

    let root = commands
        .spawn((
            Name::new("page"),
            PageRoot,
            emulator,
            layout,
            content,
            Transform::default(),
            Visibility::default(),
        ))
        .id();

    commands.entity(root).with_children(|page| {
        page.spawn((Name::new("hero"), Hero)).with_children(|hero| {
            hero.spawn((RevealSlot::HeroText, Timeline::autoplay(hero_text_tween())));
            hero.spawn((
                RevealSlot::ScrollIndicatorFade,
                Timeline::autoplay(scroll_indicator_fade_tween()),
            ));
            hero.spawn((
                RevealSlot::ScrollIndicatorBounce,
                Timeline::autoplay(scroll_indicator_bounce_tween()).with_repeat(Repeat::Yoyo),
            ));
        });

        for props in sections {
            let has_fact = props.has_fact();
            let name = Name::new(format!("section #{}", props.id));
            let mut section = page.spawn((name, Section { props }));
            let section_id = section.id();
            section.with_children(|triggers| {
                triggers.spawn((
                    RevealSlot::SectionText,
                    section_text_trigger(section_id),
                    Timeline::new(section_text_tween()),
                ));
                if has_fact {
                    triggers.spawn((
                        RevealSlot::SectionFact,
                        section_fact_trigger(section_id),
                        Timeline::new(section_fact_tween()),
                    ));
                }
            });
        }
    });

    info!("mounted page {root}");
    root
}

/// Tears down a page view and everything registered under it.
pub fn despawn_page(commands: &mut Commands, root: Entity) {
    commands.entity(root).despawn_recursive();
    info!("unmounted page {root}");
}

/// Startup content and scroll settings for the page mounted by
/// [`mount_page_system`].
#[derive(Resource, Clone, Debug, Default)]
pub struct PageSetup {
    pub content: PageContent,
    pub scroll: ScrollSettings,
}

pub fn page_plugin(app: &mut App) {
    app.init_resource::<Viewport>()
        .init_resource::<PageSetup>()
        .add_systems(Startup, mount_page_system)
        .add_systems(
            Update,
            (sync_viewport, relayout_pages)
                .chain()
                .in_set(FrameSet::Input),
        );
}

fn mount_page_system(mut commands: Commands, setup: Res<PageSetup>, viewport: Res<Viewport>) {
    spawn_page(
        &mut commands,
        setup.content.clone(),
        *viewport,
        setup.scroll.clone(),
    );
}

fn sync_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let current = Viewport {
        width: window.width(),
        height: window.height(),
    };
    if *viewport != current && current.height > 0.0 {
        *viewport = current;
    }
}

fn relayout_pages(
    viewport: Res<Viewport>,
    mut pages: Query<(&PageContent, &mut PageLayout, &mut ScrollEmulator), With<PageRoot>>,
) {
    if !viewport.is_changed() {
        return;
    }
    for (content, mut layout, mut emulator) in &mut pages {
        if layout.viewport == *viewport {
            continue;
        }
        *layout = PageLayout::measure(content, *viewport);
        emulator.resize(layout.scroll_limit());
        emulator.mark_changed();
        debug!(
            "relayout to {}x{}: limit {:.0}px",
            viewport.width,
            viewport.height,
            layout.scroll_limit()
        );
    }
}
