use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::page::Section;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    Loading,
    Ready,
    Failed,
}

/// A section's picture. A failed load leaves its area blank.
#[derive(Component, Clone, Debug)]
pub struct SectionImage {
    pub handle: Handle<Image>,
    pub status: ImageStatus,
}

pub(super) fn load_section_images(
    mut commands: Commands,
    asset_server: Option<Res<AssetServer>>,
    sections: Query<(Entity, &Section), Added<Section>>,
) {
    let Some(asset_server) = asset_server else {
        return;
    };
    for (entity, section) in &sections {
        commands.entity(entity).insert(SectionImage {
            handle: asset_server.load(section.props.image_src.clone()),
            status: ImageStatus::Loading,
        });
    }
}

pub(super) fn watch_section_images(
    asset_server: Option<Res<AssetServer>>,
    mut images: Query<(&Section, &mut SectionImage)>,
) {
    let Some(asset_server) = asset_server else {
        return;
    };
    for (section, mut image) in &mut images {
        if image.status != ImageStatus::Loading {
            continue;
        }
        match asset_server.load_state(image.handle.id()) {
            LoadState::Loaded => image.status = ImageStatus::Ready,
            LoadState::Failed(err) => {
                warn!(
                    "image {} for #{} failed to load: {err}",
                    section.props.image_src,
                    section.anchor()
                );
                image.status = ImageStatus::Failed;
            }
            _ => {}
        }
    }
}
