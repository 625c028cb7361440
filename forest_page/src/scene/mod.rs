//! The 3D forest behind the hero: a scattered, spinning, floating grove
//! with lighting, ground and an orbiting camera.

mod camera;
mod float;
mod forest;
mod materials;

use bevy::prelude::*;

pub use camera::{
    CameraRig, FIELD_OF_VIEW_DEGREES, HERO_WORLD_UNITS_PER_PX, INTRO_DURATION, INTRO_FROM,
    REST_POSITION,
};
pub use float::{FloatParams, TreeFloat};
pub use forest::{
    ForestGroup, ForestLayout, Tree, TreePlacement, TreeSpin, DEFAULT_TREE_COUNT, GROUP_SPIN,
    TRUNK_SPIN,
};
pub use materials::{Foliage, ForestAssets};

use crate::frame::FrameSet;
use crate::page::PageRoot;

const GROUND_Y: f32 = -2.0;
const AMBIENT_BRIGHTNESS: f32 = 400.0;

/// Generation parameters for scenes mounted from now on.
#[derive(Resource, Clone, Debug)]
pub struct ForestSettings {
    pub seed: Option<u64>,
    pub tree_count: usize,
}

impl Default for ForestSettings {
    fn default() -> Self {
        Self {
            seed: None,
            tree_count: DEFAULT_TREE_COUNT,
        }
    }
}

/// Root of one page's scene. Child of the page root, so unmounting the
/// page tears the scene down.
#[derive(Component, Debug)]
pub struct ForestScene {
    pub seed: u64,
}

/// Builds the scene for every newly mounted page, then keeps it moving.
pub fn forest_scene_plugin(app: &mut App) {
    app.init_resource::<ForestSettings>()
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
        })
        .add_systems(Update, mount_forest_scene.in_set(FrameSet::Input))
        .add_systems(
            Update,
            (
                forest::spin_system,
                float::float_trees_system,
                camera::camera_rig_system,
            )
                .in_set(FrameSet::Animate),
        );
}

/// Drag-to-orbit for the scene camera.
pub fn orbit_plugin(app: &mut App) {
    app.add_systems(
        Update,
        camera::orbit_input_system
            .in_set(FrameSet::Animate)
            .before(camera::camera_rig_system),
    );
}

/// Spawns the camera, lights, ground and grove for `layout` under `page`.
pub fn spawn_forest_scene(
    commands: &mut Commands,
    page: Entity,
    layout: &ForestLayout,
    assets: &ForestAssets,
) -> Entity {
    let scene = commands
        .spawn((
            Name::new("forest scene"),
            ForestScene { seed: layout.seed },
            Transform::default(),
            Visibility::default(),
        ))
        .set_parent(page)
        .id();

    commands.entity(scene).with_children(|scene| {
        scene.spawn(camera::camera_bundle());
        scene.spawn((
            Name::new("sun"),
            DirectionalLight {
                shadows_enabled: true,
                ..default()
            },
            Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ));
        scene.spawn((
            Name::new("ground"),
            Mesh3d(assets.ground_mesh.clone()),
            MeshMaterial3d(assets.ground.clone()),
            Transform::from_xyz(0.0, GROUND_Y, 0.0),
        ));
        forest::spawn_forest_group(scene, layout, assets);
    });
    scene
}

fn mount_forest_scene(
    mut commands: Commands,
    pages: Query<Entity, Added<PageRoot>>,
    settings: Res<ForestSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for page in &pages {
        let layout = ForestLayout::generate(settings.seed, settings.tree_count);
        let assets = ForestAssets::new(&mut meshes, &mut materials);
        spawn_forest_scene(&mut commands, page, &layout, &assets);
        info!(
            "planted {} trees for page {page} (seed {})",
            layout.trees.len(),
            layout.seed
        );
    }
}
