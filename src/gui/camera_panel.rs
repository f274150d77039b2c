use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use glam::Vec3;

use super::pane::{ParamPane, ParamSpec};
use crate::camera::{CameraChange, LookAtCamera};
use crate::core::timer::Debounce;

pub const TOTAL: &str = "total";
pub const POSITION_KEYS: [&str; 3] = ["camera.position.x", "camera.position.y", "camera.position.z"];
pub const TARGET_KEYS: [&str; 3] = ["camera.target.x", "camera.target.y", "camera.target.z"];

pub const TOTAL_RANGE: ParamSpec = ParamSpec::new(1.0, 100.0, 1.0);
pub const CAMERA_RANGE: ParamSpec = ParamSpec::new(-100.0, 100.0, 0.001);

/// Two-way binding between a [`LookAtCamera`] and a [`ParamPane`]
///
/// Camera mutations are mirrored into the pane; pane edits are written back
/// to the camera. Both directions arm the shared debounce that schedules the
/// next render.
pub struct CameraPanel {
    pane: ParamPane,
    camera: Weak<RefCell<LookAtCamera>>,
    debounce: Rc<RefCell<Debounce>>,
    disposed: Rc<Cell<bool>>,
}

impl CameraPanel {
    pub fn new(
        camera: &Rc<RefCell<LookAtCamera>>,
        debounce: Rc<RefCell<Debounce>>,
        total: u32,
    ) -> Self {
        let pane = ParamPane::new();
        let (position, target) = {
            let camera = camera.borrow();
            (camera.position(), camera.target())
        };

        pane.add_binding(TOTAL, TOTAL_RANGE.constrain(total as f32), TOTAL_RANGE);
        for (key, value) in POSITION_KEYS.iter().zip(position.to_array()) {
            pane.add_binding(*key, value, CAMERA_RANGE);
        }
        for (key, value) in TARGET_KEYS.iter().zip(target.to_array()) {
            pane.add_binding(*key, value, CAMERA_RANGE);
        }

        let weak_camera = Rc::downgrade(camera);
        let disposed = Rc::new(Cell::new(false));
        {
            let pane = pane.clone();
            let debounce = debounce.clone();
            let disposed = disposed.clone();
            camera.borrow_mut().on_camera_change(move |change| {
                // Outlives dispose when the camera was borrowed at the time
                if disposed.get() {
                    return;
                }
                mirror_change(&pane, change);
                debounce.borrow_mut().trigger();
            });
        }
        {
            let pane_handle = pane.clone();
            let camera = weak_camera.clone();
            let debounce = debounce.clone();
            pane.on_change(move |key, _| {
                if key != TOTAL {
                    if let Some(camera) = camera.upgrade() {
                        apply_edit(&pane_handle, &mut camera.borrow_mut(), key);
                    }
                }
                debounce.borrow_mut().trigger();
            });
        }

        Self {
            pane,
            camera: weak_camera,
            debounce,
            disposed,
        }
    }

    pub fn pane(&self) -> &ParamPane {
        &self.pane
    }

    pub fn debounce(&self) -> &Rc<RefCell<Debounce>> {
        &self.debounce
    }

    /// Instance count chosen in the pane
    pub fn total(&self) -> u32 {
        self.pane
            .get(TOTAL)
            .map_or(TOTAL_RANGE.min as u32, |total| total.round() as u32)
    }

    /// Unbind from the camera and clear the pane
    pub fn dispose(&mut self) {
        if self.disposed.replace(true) {
            return;
        }
        self.pane.dispose();
        if let Some(camera) = self.camera.upgrade() {
            match camera.try_borrow_mut() {
                Ok(mut camera) => camera.clear_camera_change(),
                Err(_) => log::debug!("camera busy during panel dispose; subscriber left inert"),
            }
        }
        log::debug!("camera panel disposed");
    }
}

impl Drop for CameraPanel {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn mirror_change(pane: &ParamPane, change: &CameraChange) {
    let values = POSITION_KEYS
        .iter()
        .zip(change.position.to_array())
        .chain(TARGET_KEYS.iter().zip(change.target.to_array()));
    for (key, value) in values {
        // Keys vanish once the pane is disposed
        let _ = pane.refresh(key, value);
    }
}

fn apply_edit(pane: &ParamPane, camera: &mut LookAtCamera, key: &str) {
    let read = |keys: &[&str; 3]| -> Option<Vec3> {
        Some(Vec3::new(
            pane.get(keys[0])?,
            pane.get(keys[1])?,
            pane.get(keys[2])?,
        ))
    };

    if POSITION_KEYS.contains(&key) {
        if let Some(position) = read(&POSITION_KEYS) {
            camera.set_position(position);
        }
    } else if TARGET_KEYS.contains(&key) {
        if let Some(target) = read(&TARGET_KEYS) {
            camera.set_target(target);
        }
    } else {
        log::debug!("ignoring edit of unbound key `{key}`");
    }
}
