use std::time::Duration;

use bevy::prelude::*;

use forest_page::content::PageContent;
use forest_page::frame::{active_subscriptions, frame_plugin, FrameSet};
use forest_page::page::{despawn_page, page_plugin, spawn_page, PageRoot, Section, Viewport};
use forest_page::scene::{forest_scene_plugin, ForestScene, ForestSettings};
use forest_page::scroll::{scroll_plugin, ScrollEmulator, ScrollRequest, ScrollSettings};
use forest_page::timeline::{
    timeline_plugin, Crossing, RevealSlot, Timeline, TriggerFired, VisualState,
};

const FRAME: f32 = 1.0 / 60.0;

#[derive(Resource, Default)]
struct Fired {
    frame: u32,
    log: Vec<(u32, String, Crossing)>,
}

fn record_text_triggers(
    mut events: EventReader<TriggerFired>,
    slots: Query<&RevealSlot>,
    sections: Query<&Section>,
    mut fired: ResMut<Fired>,
) {
    fired.frame += 1;
    let frame = fired.frame;
    for event in events.read() {
        if slots.get(event.trigger).ok() != Some(&RevealSlot::SectionText) {
            continue;
        }
        if let Ok(section) = sections.get(event.section) {
            fired
                .log
                .push((frame, section.anchor().to_string(), event.crossing));
        }
    }
}

fn app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<Fired>()
        .add_plugins((frame_plugin, page_plugin, scroll_plugin, timeline_plugin))
        .add_systems(Update, record_text_triggers.after(FrameSet::Animate));
    app.update();
    app
}

fn run_for(app: &mut App, seconds: f32) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(FRAME));
        app.update();
    }
}

fn offset(app: &mut App) -> f32 {
    let world = app.world_mut();
    world.query::<&ScrollEmulator>().single(world).offset()
}

/// Anchors that crossed with `crossing`, in firing order. Panics if two
/// sections crossed in the same frame, which would make the order ambiguous.
fn crossed(app: &App, crossing: Crossing) -> Vec<String> {
    let log: Vec<&(u32, String, Crossing)> = app
        .world()
        .resource::<Fired>()
        .log
        .iter()
        .filter(|(_, _, c)| *c == crossing)
        .collect();
    for pair in log.windows(2) {
        assert!(pair[0].0 < pair[1].0, "ambiguous order: {pair:?}");
    }
    log.into_iter().map(|(_, anchor, _)| anchor.clone()).collect()
}

fn reveal_states(app: &mut App) -> Vec<(RevealSlot, Vec<VisualState>)> {
    let world = app.world_mut();
    world
        .query::<(&RevealSlot, &Timeline)>()
        .iter(world)
        .filter(|(slot, _)| matches!(slot, RevealSlot::SectionText | RevealSlot::SectionFact))
        .map(|(slot, timeline)| {
            let samples = (0..timeline.tween().targets)
                .map(|i| timeline.sample(i))
                .collect();
            (*slot, samples)
        })
        .collect()
}

#[test]
fn scrolling_through_the_page_fires_each_text_trigger_once_each_way() {
    let mut app = app();
    let before = reveal_states(&mut app);

    app.world_mut()
        .send_event(ScrollRequest::anchor_link("#contact"));
    run_for(&mut app, 2.0);
    assert!((offset(&mut app) - 2780.0).abs() < 1e-2);

    assert_eq!(
        crossed(&app, Crossing::Enter),
        ["about", "sustainability", "gallery"]
    );
    assert_eq!(
        crossed(&app, Crossing::Leave),
        ["about", "sustainability", "gallery"]
    );
    assert!(crossed(&app, Crossing::LeaveBack).is_empty());

    app.world_mut()
        .send_event(ScrollRequest::anchor_link("#home"));
    run_for(&mut app, 3.0);
    assert!(offset(&mut app).abs() < 1e-2);

    assert_eq!(
        crossed(&app, Crossing::Enter),
        ["about", "sustainability", "gallery"]
    );
    assert_eq!(
        crossed(&app, Crossing::EnterBack),
        ["gallery", "sustainability", "about"]
    );
    assert_eq!(
        crossed(&app, Crossing::LeaveBack),
        ["gallery", "sustainability", "about"]
    );

    let after = reveal_states(&mut app);
    assert_eq!(before.len(), after.len());
    for ((slot, was), (_, now)) in before.iter().zip(&after) {
        for (a, b) in was.iter().zip(now) {
            assert!(a.approx_eq(b, 1e-3), "{slot:?} not restored: {a:?} vs {b:?}");
        }
    }
}

#[test]
fn jumping_past_bands_still_reveals_the_sections() {
    let mut app = app();
    let mut request = ScrollRequest::anchor_link("#sustainability");
    request.options.immediate = true;
    app.world_mut().send_event(request);
    run_for(&mut app, 2.0);
    assert_eq!(offset(&mut app), 1340.0);

    let fired = &app.world().resource::<Fired>().log;
    let mut entered: Vec<&str> = fired
        .iter()
        .filter(|(_, _, c)| *c == Crossing::Enter)
        .map(|(_, anchor, _)| anchor.as_str())
        .collect();
    entered.sort_unstable();
    assert_eq!(entered, ["about", "sustainability"]);

    let world = app.world_mut();
    let shown = world
        .query::<(&RevealSlot, &Timeline)>()
        .iter(world)
        .filter(|(slot, t)| **slot == RevealSlot::SectionText && t.playhead() > 0.0)
        .count();
    assert_eq!(shown, 2);
}

#[test]
fn mounting_and_unmounting_with_the_scene_returns_to_baseline() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<Assets<Mesh>>()
        .init_resource::<Assets<StandardMaterial>>()
        .insert_resource(ForestSettings {
            seed: Some(9),
            tree_count: 20,
        })
        .add_plugins((
            frame_plugin,
            page_plugin,
            scroll_plugin,
            timeline_plugin,
            forest_scene_plugin,
        ));
    app.update();
    let baseline = active_subscriptions(app.world_mut());

    for _ in 0..5 {
        let world = app.world_mut();
        let root = spawn_page(
            &mut world.commands(),
            PageContent::default(),
            Viewport::default(),
            ScrollSettings::default(),
        );
        world.flush();
        run_for(&mut app, 0.5);
        {
            let world = app.world_mut();
            assert_eq!(world.query::<&PageRoot>().iter(world).count(), 2);
            assert_eq!(world.query::<&ForestScene>().iter(world).count(), 2);
        }
        assert!(active_subscriptions(app.world_mut()) > baseline);

        let world = app.world_mut();
        despawn_page(&mut world.commands(), root);
        world.flush();
        app.update();
        assert_eq!(active_subscriptions(app.world_mut()), baseline);
    }
}
