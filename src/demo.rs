use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::math::hsva_to_rgba;
use crate::types::{InstanceRaw, Vertex};

/// Half extent of the cube in which instances are scattered
pub const SCATTER_EXTENT: f32 = 5.0;

// ============================================================================
// Variants
// ============================================================================

/// Which scene the demo binary renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    /// Flat triangles, unlit
    Triangles,
    /// Cubes lit by a directional light
    #[default]
    Cubes,
}

impl DemoVariant {
    /// Default far clip plane of the variant
    pub fn far_plane(self) -> f32 {
        match self {
            DemoVariant::Triangles => 100.0,
            DemoVariant::Cubes => 1000.0,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DemoVariant::Triangles => "Triangles - camera look-at",
            DemoVariant::Cubes => "Cubes - directional light",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DemoVariant::Triangles => "Scattered triangles viewed through an orbiting look-at camera",
            DemoVariant::Cubes => "Scattered cubes shaded by a single directional light",
        }
    }

    /// Whether the fragment shader applies the directional light
    pub fn lit(self) -> bool {
        matches!(self, DemoVariant::Cubes)
    }

    pub fn mesh(self) -> Vec<Vertex> {
        match self {
            DemoVariant::Triangles => triangle_mesh(),
            DemoVariant::Cubes => cube_mesh(),
        }
    }
}

// ============================================================================
// Meshes
// ============================================================================

/// Single triangle in the XY plane facing +Z
pub fn triangle_mesh() -> Vec<Vertex> {
    let normal = [0.0, 0.0, 1.0];
    [[0.0, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]]
        .into_iter()
        .map(|position| Vertex { position, normal })
        .collect()
}

/// Unit cube centred on the origin: 6 faces, 2 triangles each, CCW outward
pub fn cube_mesh() -> Vec<Vertex> {
    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        let center = normal * 0.5;
        let corners = [
            center - u * 0.5 - v * 0.5,
            center + u * 0.5 - v * 0.5,
            center + u * 0.5 + v * 0.5,
            center - u * 0.5 + v * 0.5,
        ];
        for index in [0, 1, 2, 0, 2, 3] {
            vertices.push(Vertex {
                position: corners[index].to_array(),
                normal: normal.to_array(),
            });
        }
    }
    vertices
}

// ============================================================================
// Instances
// ============================================================================

/// Instance data for `count` objects
///
/// The first object sits at the origin in white; the rest follow a
/// low-discrepancy sequence through [-5, 5]^3 with hues spread by the golden
/// ratio, so the layout is stable between runs.
pub fn instances(count: u32) -> Vec<InstanceRaw> {
    (0..count).map(instance).collect()
}

fn instance(index: u32) -> InstanceRaw {
    if index == 0 {
        return InstanceRaw::new(Mat4::IDENTITY, [1.0, 1.0, 1.0, 1.0]);
    }

    let position = scatter(index);
    let hue = (index as f32 * 0.618_034).fract();
    InstanceRaw::new(
        Mat4::from_translation(position),
        hsva_to_rgba(hue, 0.65, 0.95, 1.0),
    )
}

/// R3 sequence point mapped into the scatter cube
fn scatter(index: u32) -> Vec3 {
    // Plastic-number generalization of the golden ratio to three dimensions
    const G: f64 = 1.220_744_084_605_759_5;
    let alpha = [1.0 / G, 1.0 / (G * G), 1.0 / (G * G * G)];

    let n = index as f64;
    let unit = alpha.map(|a| (0.5 + a * n).fract() as f32);
    Vec3::from_array(unit) * (2.0 * SCATTER_EXTENT) - Vec3::splat(SCATTER_EXTENT)
}
