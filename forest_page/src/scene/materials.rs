//! Shared meshes, materials and palette for the forest scene.

use bevy::prelude::*;

/// `#5c3d2e`
pub const TRUNK_COLOR: Color = Color::srgb(0.361, 0.239, 0.180);
/// `#2d4c25`
pub const FOLIAGE_DEEP: Color = Color::srgb(0.176, 0.298, 0.145);
/// `#3a5e30`
pub const FOLIAGE_MOSS: Color = Color::srgb(0.227, 0.369, 0.188);
/// `#2a3e1f`
pub const GROUND_COLOR: Color = Color::srgb(0.165, 0.243, 0.122);

const GROUND_SIZE: f32 = 100.0;

/// The two foliage tints a tree can be given.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Foliage {
    Deep,
    Moss,
}

impl Foliage {
    pub fn color(self) -> Color {
        match self {
            Foliage::Deep => FOLIAGE_DEEP,
            Foliage::Moss => FOLIAGE_MOSS,
        }
    }
}

/// Handles shared by every tree so a scene allocates each asset once.
pub struct ForestAssets {
    pub trunk_mesh: Handle<Mesh>,
    pub foliage_mesh: Handle<Mesh>,
    pub ground_mesh: Handle<Mesh>,
    pub trunk: Handle<StandardMaterial>,
    pub foliage_deep: Handle<StandardMaterial>,
    pub foliage_moss: Handle<StandardMaterial>,
    pub ground: Handle<StandardMaterial>,
}

impl ForestAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        Self {
            trunk_mesh: meshes.add(ConicalFrustum {
                radius_top: 0.2,
                radius_bottom: 0.4,
                height: 1.0,
            }),
            foliage_mesh: meshes.add(Cone {
                radius: 1.5,
                height: 3.0,
            }),
            ground_mesh: meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE)),
            trunk: materials.add(TRUNK_COLOR),
            foliage_deep: materials.add(FOLIAGE_DEEP),
            foliage_moss: materials.add(FOLIAGE_MOSS),
            ground: materials.add(StandardMaterial {
                base_color: GROUND_COLOR,
                perceptual_roughness: 1.0,
                ..default()
            }),
        }
    }

    pub fn foliage(&self, foliage: Foliage) -> Handle<StandardMaterial> {
        match foliage {
            Foliage::Deep => self.foliage_deep.clone(),
            Foliage::Moss => self.foliage_moss.clone(),
        }
    }
}
