use std::f32::consts::PI;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::frame::FrameSubscription;

use super::float::{TreeFloat, FLOAT_PHASE_RANGE};
use super::materials::{Foliage, ForestAssets};

pub const DEFAULT_TREE_COUNT: usize = 50;
/// Trees are scattered over `(-HALF_SPREAD, HALF_SPREAD)` on x and z.
pub const HALF_SPREAD: f32 = 15.0;
pub const MAX_TREE_HEIGHT: f32 = 15.0;
pub const MIN_TREE_SCALE: f32 = 0.1;
pub const MAX_TREE_SCALE: f32 = 0.6;

/// Radians per frame.
pub const TRUNK_SPIN: f32 = 0.001;
/// Radians per frame.
pub const GROUP_SPIN: f32 = 0.0005;

#[derive(Clone, Debug, PartialEq)]
pub struct TreePlacement {
    pub position: Vec3,
    pub scale: f32,
    pub yaw: f32,
    pub foliage: Foliage,
    pub float_phase: f32,
}

/// Where every tree of one scene goes. Generated once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct ForestLayout {
    pub seed: u64,
    pub trees: Vec<TreePlacement>,
}

impl ForestLayout {
    /// Scatters `count` trees. Without a seed a fresh one is drawn, so each
    /// mount looks different.
    pub fn generate(seed: Option<u64>, count: usize) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        let trees = (0..count)
            .map(|_| TreePlacement {
                position: Vec3::new(
                    rng.random_range(-HALF_SPREAD..HALF_SPREAD),
                    rng.random_range(0.0..MAX_TREE_HEIGHT),
                    rng.random_range(-HALF_SPREAD..HALF_SPREAD),
                ),
                scale: rng.random_range(MIN_TREE_SCALE..MAX_TREE_SCALE),
                yaw: rng.random_range(0.0..PI),
                foliage: if rng.random_bool(0.5) {
                    Foliage::Deep
                } else {
                    Foliage::Moss
                },
                float_phase: rng.random_range(0.0..FLOAT_PHASE_RANGE),
            })
            .collect();
        Self { seed, trees }
    }
}

/// The slowly turning group that holds every tree.
#[derive(Component, Debug, Default)]
#[require(FrameSubscription)]
pub struct ForestGroup;

#[derive(Component, Debug)]
pub struct Tree;

/// Spins a trunk about its own axis.
#[derive(Component, Debug, Default)]
#[require(FrameSubscription)]
pub struct TreeSpin;

pub(super) fn spawn_forest_group(
    parent: &mut ChildBuilder,
    layout: &ForestLayout,
    assets: &ForestAssets,
) {
    parent
        .spawn((
            Name::new("forest"),
            ForestGroup,
            Transform::default(),
            Visibility::default(),
        ))
        .with_children(|group| {
            for tree in &layout.trees {
                group
                    .spawn((
                        TreeFloat::new(tree.float_phase),
                        Transform::default(),
                        Visibility::default(),
                    ))
                    .with_children(|float| {
                        float
                            .spawn((
                                Tree,
                                Transform {
                                    translation: tree.position,
                                    rotation: Quat::from_rotation_y(tree.yaw),
                                    scale: Vec3::splat(tree.scale),
                                },
                                Visibility::default(),
                            ))
                            .with_children(|parts| {
                                parts.spawn((
                                    TreeSpin,
                                    Mesh3d(assets.trunk_mesh.clone()),
                                    MeshMaterial3d(assets.trunk.clone()),
                                    Transform::default(),
                                ));
                                parts.spawn((
                                    Mesh3d(assets.foliage_mesh.clone()),
                                    MeshMaterial3d(assets.foliage(tree.foliage)),
                                    Transform::from_xyz(0.0, 1.5, 0.0),
                                ));
                            });
                    });
            }
        });
}

pub(super) fn spin_system(
    mut groups: Query<&mut Transform, With<ForestGroup>>,
    mut trunks: Query<&mut Transform, (With<TreeSpin>, Without<ForestGroup>)>,
) {
    for mut transform in &mut groups {
        transform.rotate_y(GROUP_SPIN);
    }
    for mut transform in &mut trunks {
        transform.rotate_y(TRUNK_SPIN);
    }
}
