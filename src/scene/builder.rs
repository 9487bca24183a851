//! Room assembly
//!
//! Populates a [`Scene`] with catalog items, a shadow-casting key light and
//! a tiled room corner: a floor and two walls meeting at the origin.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use glam::Vec3;
use image::RgbaImage;

use crate::config::ItemCatalog;
use crate::errors::Result;
use crate::resources::color::color_from_hex;
use crate::resources::geometry::Geometry;
use crate::resources::material::{Material, StandardMaterial};
use crate::resources::mesh::Mesh;
use crate::resources::primitives::{PlaneOptions, create_plane};
use crate::resources::texture::{scaled_texture, tile_grid_image};
use crate::scene::light::{Light, ShadowCamera, ShadowConfig};
use crate::scene::transform::Transform;
use crate::scene::{NodeHandle, Scene};

pub const BACKGROUND_COLOR: u32 = 0xf0f0f0;

/// Catalog items placed by [`SceneBuilder::build_scene`], in order.
pub const SCENE_ITEMS: [&str; 3] = ["door", "box", "sphere"];

pub const WALL_WIDTH: f32 = 120.0;
pub const WALL_HEIGHT: f32 = 40.0;

const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 25.0, 15.0);
const SHADOW_FLOOR_SIZE: f32 = 50.0;
const SHADOW_FLOOR_Y: f32 = -5.0;

pub struct SceneBuilder {
    catalog: ItemCatalog,
    key_light: Light,
    tile_image: Arc<RgbaImage>,
}

impl SceneBuilder {
    #[must_use]
    pub fn new(catalog: ItemCatalog) -> Self {
        Self {
            catalog,
            key_light: Self::key_light(),
            tile_image: Arc::new(tile_grid_image()),
        }
    }

    /// White directional light with a soft 2048² shadow map covering ±20
    /// units.
    #[must_use]
    pub fn key_light() -> Light {
        let mut light = Light::new_directional(color_from_hex(0xffffff), 1.2);
        light.cast_shadows = true;
        light.shadow = Some(ShadowConfig {
            bias: -0.0001,
            normal_bias: 0.0,
            map_size: 2048,
            radius: 3.0,
            camera: ShadowCamera {
                near: 0.5,
                far: 50.0,
                left: -20.0,
                right: 20.0,
                top: 20.0,
                bottom: -20.0,
            },
        });
        light
    }

    #[must_use]
    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    /// Rebuilds the scene content.
    ///
    /// Everything except camera nodes is removed, then the catalog items
    /// that exist are added, followed by the key light, the walls and a
    /// shadow-receiving floor below them.
    pub fn build_scene(&self, scene: &mut Scene) -> Result<()> {
        scene.background = Some(color_from_hex(BACKGROUND_COLOR));
        scene.clear_content();

        let mut placed = 0;
        for name in SCENE_ITEMS {
            if let Some(item) = self.catalog.find(name) {
                scene.add_object(item)?;
                placed += 1;
            }
        }

        self.setup_lighting(scene);
        self.add_walls(scene);
        Self::add_shadow_floor(scene);

        log::debug!(
            "SceneBuilder: built scene {} with {placed} items, {} nodes",
            scene.id,
            scene.node_count()
        );
        Ok(())
    }

    /// Replaces every light in the scene with the key light.
    pub fn setup_lighting(&self, scene: &mut Scene) -> NodeHandle {
        let removed = scene.remove_lights();
        if removed > 0 {
            log::debug!("SceneBuilder: replaced {removed} lights");
        }
        scene.add_light(
            self.key_light.clone(),
            Transform::from_position(KEY_LIGHT_POSITION),
        )
    }

    /// Adds the tiled floor and the two walls along the X and Z axes.
    /// Returns `[floor, wallR, wall]`.
    pub fn add_walls(&self, scene: &mut Scene) -> [NodeHandle; 3] {
        let wall_geometry = Arc::new(create_plane(&PlaneOptions {
            width: WALL_WIDTH,
            height: WALL_HEIGHT,
            ..Default::default()
        }));
        let floor_geometry = Arc::new(create_plane(&PlaneOptions {
            width: WALL_WIDTH,
            height: WALL_WIDTH,
            ..Default::default()
        }));

        let wall_material = Arc::new(self.tiled_material("wall", WALL_WIDTH, WALL_HEIGHT));
        let floor_material = Arc::new(self.tiled_material("floor", WALL_WIDTH, WALL_WIDTH));

        let surface = |name: &str, geometry: &Arc<Geometry>, material: &Arc<Material>| {
            let mut mesh = Mesh::new(Arc::clone(geometry), Arc::clone(material)).with_name(name);
            mesh.receive_shadow = true;
            mesh
        };

        let half_width = WALL_WIDTH / 2.0;
        let half_height = WALL_HEIGHT / 2.0;

        let mut floor_transform = Transform::from_position(Vec3::new(half_width, 0.0, half_width));
        floor_transform.set_rotation_euler(-FRAC_PI_2, 0.0, 0.0);
        let floor = scene.add_mesh(
            surface("floor", &floor_geometry, &floor_material),
            floor_transform,
        );

        let mut wall_r_transform =
            Transform::from_position(Vec3::new(0.0, half_height, half_width));
        wall_r_transform.set_rotation_euler(0.0, FRAC_PI_2, 0.0);
        let wall_r = scene.add_mesh(
            surface("wallR", &wall_geometry, &wall_material),
            wall_r_transform,
        );

        let wall = scene.add_mesh(
            surface("wall", &wall_geometry, &wall_material),
            Transform::from_position(Vec3::new(half_width, half_height, 0.0)),
        );

        [floor, wall_r, wall]
    }

    fn tiled_material(&self, name: &str, width: f32, height: f32) -> Material {
        let texture = scaled_texture(name, Arc::clone(&self.tile_image), width, height, 1.0, false);
        StandardMaterial::default()
            .with_map(Arc::new(texture))
            .into()
    }

    fn add_shadow_floor(scene: &mut Scene) -> NodeHandle {
        let geometry = create_plane(&PlaneOptions {
            width: SHADOW_FLOOR_SIZE,
            height: SHADOW_FLOOR_SIZE,
            ..Default::default()
        });
        let material = StandardMaterial::new(color_from_hex(0xdddddd))
            .with_roughness(0.8)
            .with_metalness(0.2);

        let mut mesh = Mesh::new(Arc::new(geometry), Arc::new(material.into()))
            .with_name("shadowFloor");
        mesh.receive_shadow = true;

        let mut transform = Transform::from_position(Vec3::new(0.0, SHADOW_FLOOR_Y, 0.0));
        transform.set_rotation_euler(-FRAC_PI_2, 0.0, 0.0);
        scene.add_mesh(mesh, transform)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new(ItemCatalog::builtin())
    }
}
