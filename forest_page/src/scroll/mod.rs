//! Smooth-scroll emulation: input handling and the per-frame tick that
//! publishes the page's virtual scroll offset.

mod emulator;

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::Touches;
use bevy::prelude::*;

pub use emulator::{
    AnchorLookup, ScrollDirection, ScrollEmulator, ScrollSettings, ScrollState, ScrollTarget,
    ScrollToOptions, DEFAULT_DURATION, LINE_HEIGHT_PX,
};

use crate::frame::FrameSet;
use crate::page::{PageLayout, PageRoot};

const ARROW_STEP_PX: f32 = 40.0;

/// Published after a tick that moved a page's offset.
#[derive(Event, Clone, Copy, Debug)]
pub struct ScrollUpdated {
    pub page: Entity,
    pub state: ScrollState,
}

/// Asks every mounted page to scroll, e.g. from an anchor link.
#[derive(Event, Clone, Debug)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub options: ScrollToOptions,
}

impl ScrollRequest {
    /// A smooth in-page link to `href` (`"#about"`).
    pub fn anchor_link(href: &str) -> Self {
        Self {
            target: ScrollTarget::from(href),
            options: ScrollToOptions::anchor_link(),
        }
    }
}

/// Request handling and the tick. Input devices are wired separately by
/// [`scroll_input_plugin`].
pub fn scroll_plugin(app: &mut App) {
    app.add_event::<ScrollUpdated>()
        .add_event::<ScrollRequest>()
        .add_systems(Update, apply_scroll_requests.in_set(FrameSet::Input))
        .add_systems(Update, tick_scroll_system.in_set(FrameSet::Scroll));
}

/// Mouse wheel, touch drag and keyboard scrolling.
pub fn scroll_input_plugin(app: &mut App) {
    app.add_systems(
        Update,
        (wheel_input_system, touch_input_system, keyboard_input_system)
            .before(apply_scroll_requests)
            .in_set(FrameSet::Input),
    );
}

fn apply_scroll_requests(
    mut requests: EventReader<ScrollRequest>,
    mut pages: Query<(&mut ScrollEmulator, &PageLayout), With<PageRoot>>,
) {
    for request in requests.read() {
        for (mut emulator, layout) in &mut pages {
            emulator.scroll_to(&request.target, &request.options, layout);
        }
    }
}

fn tick_scroll_system(
    time: Res<Time>,
    mut pages: Query<(Entity, &mut ScrollEmulator), With<PageRoot>>,
    mut updates: EventWriter<ScrollUpdated>,
) {
    let dt = time.delta_secs();
    for (page, mut emulator) in &mut pages {
        let state = emulator.tick(dt);
        if emulator.take_changed() {
            updates.send(ScrollUpdated { page, state });
        }
    }
}

fn wheel_input_system(
    mut wheel: EventReader<MouseWheel>,
    mut pages: Query<&mut ScrollEmulator, With<PageRoot>>,
) {
    let delta: f32 = wheel
        .read()
        .map(|event| match event.unit {
            MouseScrollUnit::Line => -event.y * LINE_HEIGHT_PX,
            MouseScrollUnit::Pixel => -event.y,
        })
        .sum();
    if delta == 0.0 {
        return;
    }
    for mut emulator in &mut pages {
        emulator.on_wheel(delta);
    }
}

fn touch_input_system(
    touches: Res<Touches>,
    mut pages: Query<&mut ScrollEmulator, With<PageRoot>>,
) {
    let drag: f32 = touches.iter().map(|touch| -touch.delta().y).sum();
    if drag == 0.0 {
        return;
    }
    for mut emulator in &mut pages {
        emulator.on_touch(drag);
    }
}

fn keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut pages: Query<(&mut ScrollEmulator, &PageLayout), With<PageRoot>>,
) {
    let shift = keys.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
    for (mut emulator, layout) in &mut pages {
        let page_step = (layout.viewport.height - ARROW_STEP_PX).max(ARROW_STEP_PX);
        let mut delta = 0.0;
        if keys.just_pressed(KeyCode::ArrowDown) {
            delta += ARROW_STEP_PX;
        }
        if keys.just_pressed(KeyCode::ArrowUp) {
            delta -= ARROW_STEP_PX;
        }
        if keys.just_pressed(KeyCode::PageDown) {
            delta += page_step;
        }
        if keys.just_pressed(KeyCode::PageUp) {
            delta -= page_step;
        }
        if keys.just_pressed(KeyCode::Space) {
            delta += if shift { -page_step } else { page_step };
        }
        if delta != 0.0 {
            emulator.scroll_by(delta);
        }

        let edge = if keys.just_pressed(KeyCode::Home) {
            Some(ScrollTarget::Top)
        } else if keys.just_pressed(KeyCode::End) {
            Some(ScrollTarget::Bottom)
        } else {
            None
        };
        if let Some(target) = edge {
            emulator.scroll_to(&target, &ScrollToOptions::default(), layout);
        }
    }
}
