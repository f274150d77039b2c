use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_FOV_Y_DEGREES: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Initial camera placement and projection parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

/// Gesture sensitivities of the camera input controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub pan_speed_x: f32,
    pub pan_speed_y: f32,
    pub rotate_speed_x: f32,
    pub rotate_speed_y: f32,
    pub dolly_speed: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            pan_speed_x: 0.1,
            pan_speed_y: 0.1,
            rotate_speed_x: 0.0025,
            rotate_speed_y: 0.0025,
            dolly_speed: 0.1,
        }
    }
}

/// Everything the demo binary reads from its optional JSON config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub camera: CameraConfig,
    pub controller: ControllerConfig,
    /// Trailing-edge delay before a camera change triggers a redraw
    pub debounce_ms: f32,
    /// Number of instances drawn
    pub total: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            controller: ControllerConfig::default(),
            debounce_ms: 1.0,
            total: 10,
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_camera_contract() {
        let config = DemoConfig::default();
        assert_eq!(config.camera.position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(config.camera.target, Vec3::ZERO);
        assert_eq!(config.camera.fov_y_degrees, 45.0);
        assert_eq!(config.camera.near, 0.1);
        assert_eq!(config.controller.rotate_speed_x, 0.0025);
        assert_eq!(config.controller.dolly_speed, 0.1);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: DemoConfig = serde_json::from_str(
            r#"{ "camera": { "far": 100.0 }, "controller": { "dolly_speed": 0.5 } }"#,
        )
        .unwrap();

        assert_eq!(config.camera.far, 100.0);
        assert_eq!(config.camera.position, Vec3::new(0.0, 0.0, 10.0));
        assert_eq!(config.controller.dolly_speed, 0.5);
        assert_eq!(config.controller.pan_speed_x, 0.1);
        assert_eq!(config.total, 10);
    }

    #[test]
    fn test_vectors_are_arrays() {
        let config: CameraConfig =
            serde_json::from_str(r#"{ "position": [1.0, 2.0, 3.0] }"#).unwrap();
        assert_eq!(config.position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_load_reports_path() {
        let missing = Path::new("/definitely/not/here.json");
        match DemoConfig::load(missing) {
            Err(Error::ConfigIo { path, .. }) => assert_eq!(path, missing),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = std::env::temp_dir().join("lookat_camera_bad_config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = DemoConfig::load(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }
}
