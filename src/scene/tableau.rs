//! The desk tableau: a dolphin figurine, a laptop, a book and headphones on
//! a glass table, in front of a wall.

use glam::{Vec2, Vec3};

use crate::renderer::light::LightSource;
use crate::renderer::material::Material;
use crate::renderer::mesh::MeshKind::{
    self, Cone, Cylinder, Plane, Prism, Sphere, TaperedCylinder, Torus,
};
use crate::renderer::transform::Transform;
use crate::scene::SubObject::{self, Book, Dolphin, Headphones, Laptop, Room};
use crate::scene::{Instance, SceneDescription, Surface, TextureSource};

pub const TEXTURES: [TextureSource; 10] = [
    TextureSource { tag: "fur", file: "bluefur.jpg" },
    TextureSource { tag: "black", file: "blackplastic.jpg" },
    TextureSource { tag: "glass", file: "glass.jpg" },
    TextureSource { tag: "wall", file: "drywall.jpg" },
    TextureSource { tag: "keyboard", file: "keyboard.jpg" },
    TextureSource { tag: "screen", file: "screen.jpg" },
    TextureSource { tag: "book", file: "book.jpg" },
    TextureSource { tag: "pages", file: "pages.jpg" },
    TextureSource { tag: "headphones", file: "headphones.jpg" },
    TextureSource { tag: "floor", file: "room.jpg" },
];

pub fn materials() -> Vec<Material> {
    vec![
        Material {
            tag: "fur".to_string(),
            ambient_color: Vec3::splat(0.1),
            ambient_strength: 0.3,
            diffuse_color: Vec3::splat(0.1),
            specular_color: Vec3::splat(0.1),
            shininess: 0.2,
        },
        Material {
            tag: "wall".to_string(),
            ambient_color: Vec3::splat(0.01),
            ambient_strength: 0.1,
            diffuse_color: Vec3::ZERO,
            specular_color: Vec3::ZERO,
            shininess: 0.1,
        },
    ]
}

pub const LIGHTS: [LightSource; 2] = [
    LightSource {
        position: Vec3::new(0.0, 3.0, 20.0),
        ambient_color: Vec3::new(0.1, 0.1, 0.1),
        diffuse_color: Vec3::new(0.2, 0.2, 0.2),
        specular_color: Vec3::ZERO,
        focal_strength: 12.0,
        specular_intensity: 0.2,
    },
    LightSource {
        position: Vec3::new(-3.0, 4.0, 6.0),
        ambient_color: Vec3::new(0.01, 0.01, 0.01),
        diffuse_color: Vec3::new(0.5, 0.5, 0.5),
        specular_color: Vec3::new(0.2, 0.2, 0.2),
        focal_strength: 32.0,
        specular_intensity: 0.2,
    },
];

#[allow(clippy::too_many_arguments)]
const fn textured(
    part: SubObject,
    name: &'static str,
    mesh: MeshKind,
    scale: [f32; 3],
    rotation_degrees: [f32; 3],
    translation: [f32; 3],
    texture: &'static str,
    material: Option<&'static str>,
) -> Instance {
    Instance {
        part,
        name,
        mesh,
        transform: Transform::new(
            Vec3::new(scale[0], scale[1], scale[2]),
            Vec3::new(rotation_degrees[0], rotation_degrees[1], rotation_degrees[2]),
            Vec3::new(translation[0], translation[1], translation[2]),
        ),
        surface: Surface::Texture(texture),
        material,
        uv_scale: Vec2::ONE,
    }
}

const FUR: Option<&str> = Some("fur");
const WALL: Option<&str> = Some("wall");

pub const INSTANCES: [Instance; 20] = [
    textured(Room, "table top", Cylinder, [15.0, 0.5, 15.0], [0.0, 0.0, 0.0], [0.0, -2.0, 0.0], "glass", WALL),
    textured(Room, "back wall", Plane, [50.0, 1.0, 50.0], [90.0, 0.0, 0.0], [0.0, 15.0, -20.0], "wall", WALL),
    textured(Room, "floor", Plane, [50.0, 1.0, 50.0], [0.0, 0.0, 0.0], [0.0, -27.5, 0.0], "floor", WALL),
    textured(Dolphin, "body", Cylinder, [2.0, 5.0, 2.0], [0.0, 45.0, 90.0], [7.0, 1.0, 7.0], "fur", FUR),
    textured(Dolphin, "tail", TaperedCylinder, [2.0, 4.0, 2.0], [0.0, 45.0, 270.0], [7.0, 1.0, 7.0], "fur", FUR),
    textured(Dolphin, "head", Sphere, [2.0, 2.0, 2.0], [0.0, 0.0, 0.0], [3.0, 1.0, 11.0], "fur", FUR),
    textured(Dolphin, "snout", Cone, [1.0, 2.0, 1.0], [0.0, 45.0, 100.0], [2.0, 0.5, 12.0], "fur", FUR),
    textured(Dolphin, "tail joint", Sphere, [0.9, 0.9, 0.9], [0.0, 0.0, 0.0], [9.95, 1.05, 4.25], "fur", FUR),
    textured(Dolphin, "dorsal fin", Prism, [1.0, 0.25, 1.5], [-90.0, 0.0, 45.0], [5.0, 3.5, 9.0], "fur", FUR),
    textured(Dolphin, "flipper", Prism, [1.0, 0.5, 2.0], [15.0, 25.0, 0.0], [6.0, 0.0, 11.5], "fur", FUR),
    textured(Dolphin, "tail fins", Prism, [2.0, 0.5, 2.0], [10.0, -45.0, 0.0], [10.8, 1.0, 4.0], "fur", FUR),
    textured(Dolphin, "right eye", Sphere, [0.25, 0.45, 0.25], [0.0, 0.0, 0.0], [3.25, 1.6, 13.15], "black", FUR),
    textured(Dolphin, "left eye", Sphere, [0.25, 0.45, 0.25], [0.0, 0.0, 0.0], [1.25, 1.6, 11.0], "black", FUR),
    textured(Laptop, "keyboard deck", MeshKind::Box, [10.25, 0.2, 8.25], [5.0, 0.0, 0.0], [-0.5, 0.0, 4.0], "keyboard", None),
    textured(Laptop, "screen", MeshKind::Box, [10.25, 0.2, 8.25], [90.0, 0.0, 0.0], [-0.5, 3.0, -0.5], "screen", None),
    textured(Book, "cover", MeshKind::Box, [7.0, 1.5, 5.0], [0.0, -20.0, 0.0], [-5.5, 0.0, 9.75], "book", None),
    textured(Book, "pages", MeshKind::Box, [6.8, 1.3, 4.8], [0.0, -20.0, 0.0], [-5.375, 0.0, 9.75], "pages", None),
    textured(Headphones, "headband", Torus, [2.5, 2.5, 1.5], [90.0, 0.0, 0.0], [-5.375, 1.0, 9.75], "black", None),
    textured(Headphones, "right cup", TaperedCylinder, [1.65, 0.75, 1.65], [0.0, 0.0, 0.0], [-3.75, 0.8, 11.5], "headphones", None),
    textured(Headphones, "left cup", TaperedCylinder, [1.65, 0.75, 1.65], [0.0, 0.0, 0.0], [-3.0, 0.8, 9.75], "headphones", None),
];

pub fn description() -> SceneDescription {
    SceneDescription {
        textures: TEXTURES.to_vec(),
        materials: materials(),
        lights: LIGHTS.to_vec(),
        instances: INSTANCES.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::renderer::light::MAX_LIGHTS;
    use crate::renderer::texture::TEXTURE_SLOTS;

    #[test]
    fn every_referenced_tag_is_defined() {
        let textures: HashSet<_> = TEXTURES.iter().map(|source| source.tag).collect();
        let materials: HashSet<_> = materials().into_iter().map(|m| m.tag).collect();
        for instance in &INSTANCES {
            if let Surface::Texture(tag) = instance.surface {
                assert!(textures.contains(tag), "{} uses unknown texture {tag}", instance.name);
            }
            if let Some(tag) = instance.material {
                assert!(materials.contains(tag), "{} uses unknown material {tag}", instance.name);
            }
        }
    }

    #[test]
    fn fits_the_shader_limits() {
        assert!(TEXTURES.len() <= TEXTURE_SLOTS);
        assert!(LIGHTS.len() <= MAX_LIGHTS);
        let tags: HashSet<_> = TEXTURES.iter().map(|source| source.tag).collect();
        assert_eq!(tags.len(), TEXTURES.len());
    }

    #[test]
    fn wall_material_is_its_own_definition() {
        let materials = materials();
        let wall = materials.iter().find(|m| m.tag == "wall").unwrap();
        let fur = materials.iter().find(|m| m.tag == "fur").unwrap();
        assert_ne!(wall, fur);
        assert_eq!(wall.ambient_strength, 0.1);
    }

    #[test]
    fn instances_are_grouped_by_sub_object() {
        let mut order: Vec<SubObject> = Vec::new();
        for instance in &INSTANCES {
            if order.last() != Some(&instance.part) {
                assert!(!order.contains(&instance.part), "{} is split up", instance.part);
                order.push(instance.part);
            }
        }
        assert_eq!(order, vec![Room, Dolphin, Laptop, Book, Headphones]);
    }

    #[test]
    fn first_draw_is_the_glass_table() {
        let table = &INSTANCES[0];
        assert_eq!(table.mesh, Cylinder);
        assert_eq!(table.surface, Surface::Texture("glass"));
        assert_eq!(table.material, Some("wall"));
        assert_eq!(table.transform.translation, Vec3::new(0.0, -2.0, 0.0));
    }
}
