//! SDK entry points and builder for composing the forest page app.

use bevy::prelude::*;

use crate::config::{self, PageConfig};
use crate::content::PageContent;
use crate::frame::frame_plugin;
use crate::page::{page_plugin, PageSetup, Viewport};
use crate::scene::{forest_scene_plugin, orbit_plugin};
use crate::scroll::{scroll_input_plugin, scroll_plugin};
use crate::timeline::timeline_plugin;
use crate::ui::{page_ui_plugin, theme};

/// Builder for constructing the ForestSustain app with customizable plugins.
pub struct ForestPageBuilder {
    config: Option<PageConfig>,
    window_title: String,
    window_resolution: (f32, f32),
    clear_color: Color,
    enable_scene: bool,
    enable_orbit: bool,
    enable_ui: bool,
    enable_scroll_input: bool,
}

impl Default for ForestPageBuilder {
    fn default() -> Self {
        Self {
            config: None,
            window_title: "ForestSustain".to_string(),
            window_resolution: (1280.0, 720.0),
            clear_color: theme::clear_color(),
            enable_scene: true,
            enable_orbit: true,
            enable_ui: true,
            enable_scroll_input: true,
        }
    }
}

impl ForestPageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit configuration instead of reading the environment.
    pub fn config(mut self, config: PageConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Load the configuration from `FOREST_*` environment variables.
    pub fn page_config(mut self) -> Self {
        self.config = Some(config::page_config());
        self
    }

    pub fn content(mut self, content: PageContent) -> Self {
        self.config.get_or_insert_with(PageConfig::default).content = content;
        self
    }

    /// Fix the tree layout seed so every run plants the same forest.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.get_or_insert_with(PageConfig::default).seed = Some(seed);
        self
    }

    pub fn tree_count(mut self, count: usize) -> Self {
        self.config.get_or_insert_with(PageConfig::default).tree_count = count;
        self
    }

    pub fn window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn window_resolution(mut self, width: f32, height: f32) -> Self {
        self.window_resolution = (width, height);
        self
    }

    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    pub fn disable_scene(mut self) -> Self {
        self.enable_scene = false;
        self
    }

    pub fn disable_orbit(mut self) -> Self {
        self.enable_orbit = false;
        self
    }

    pub fn disable_ui(mut self) -> Self {
        self.enable_ui = false;
        self
    }

    pub fn disable_scroll_input(mut self) -> Self {
        self.enable_scroll_input = false;
        self
    }

    /// Build the Bevy app with the selected configuration and plugins.
    pub fn build(self) -> App {
        let config = self.config.unwrap_or_else(config::page_config);
        let (width, height) = self.window_resolution;

        let mut app = App::new();
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: self.window_title,
                resolution: self.window_resolution.into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(self.clear_color))
        .insert_resource(Viewport { width, height })
        .insert_resource(config.forest_settings())
        .insert_resource(PageSetup {
            scroll: config.scroll_settings(),
            content: config.content,
        })
        .add_plugins((frame_plugin, page_plugin, scroll_plugin, timeline_plugin));

        if self.enable_scroll_input {
            app.add_plugins(scroll_input_plugin);
        }
        if self.enable_scene {
            app.add_plugins(forest_scene_plugin);
            if self.enable_orbit {
                app.add_plugins(orbit_plugin);
            }
        } else {
            app.add_systems(Startup, spawn_page_camera);
        }
        if self.enable_ui {
            app.add_plugins(page_ui_plugin);
        }

        app
    }
}

/// The overlay still needs a camera to draw into when the 3D scene is off.
fn spawn_page_camera(mut commands: Commands) {
    commands.spawn((Name::new("page camera"), Camera2d));
}
