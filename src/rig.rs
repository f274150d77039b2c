use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::LookAtCamera;
use crate::config::DemoConfig;
use crate::core::controller::CameraInputController;
use crate::core::element::{Document, Element};
use crate::core::timer::Debounce;
use crate::error::Result;
use crate::gui::{CameraPanel, ParamPane};
use crate::types::CameraUniform;

/// Controller, camera and optional panel bound to one canvas element
///
/// Every camera change arms the shared debounce; the owner polls
/// [`tick`](Self::tick) once per frame and renders when it returns true.
pub struct CameraRig {
    element: Element,
    controller: CameraInputController,
    camera: Rc<RefCell<LookAtCamera>>,
    panel: Option<CameraPanel>,
    debounce: Rc<RefCell<Debounce>>,
    total: u32,
}

impl CameraRig {
    pub fn new(
        document: &Document,
        canvas_id: &str,
        config: &DemoConfig,
        with_panel: bool,
    ) -> Result<Self> {
        let element = document.element(canvas_id)?;
        let debounce = Rc::new(RefCell::new(Debounce::from_millis(config.debounce_ms)));

        let controller = CameraInputController::with_config(&element, config.controller);
        let camera = Rc::new(RefCell::new(LookAtCamera::with_config(
            &element,
            config.camera,
        )));
        LookAtCamera::attach(&camera);

        let panel = if with_panel {
            Some(CameraPanel::new(&camera, debounce.clone(), config.total))
        } else {
            let debounce = debounce.clone();
            camera
                .borrow_mut()
                .on_camera_change(move |_| debounce.borrow_mut().trigger());
            None
        };

        log::info!(
            "camera rig ready on `{canvas_id}` (panel: {})",
            if with_panel { "on" } else { "off" }
        );

        Ok(Self {
            element,
            controller,
            camera,
            panel,
            debounce,
            total: config.total,
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn camera(&self) -> &Rc<RefCell<LookAtCamera>> {
        &self.camera
    }

    pub fn controller(&self) -> &CameraInputController {
        &self.controller
    }

    pub fn pane(&self) -> Option<&ParamPane> {
        self.panel.as_ref().map(CameraPanel::pane)
    }

    /// Instance count, from the pane when present
    pub fn total(&self) -> u32 {
        self.panel.as_ref().map_or(self.total, CameraPanel::total)
    }

    pub fn uniform(&self) -> CameraUniform {
        self.camera.borrow().to_uniform()
    }

    /// Arm the debounce without a camera change, e.g. for the first frame
    pub fn request_redraw(&self) {
        self.debounce.borrow_mut().trigger();
    }

    /// Advance the debounce; true when a render is due
    pub fn tick(&self, delta: f32) -> bool {
        self.debounce.borrow_mut().tick(delta)
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.borrow().is_pending()
    }

    /// Seconds until the pending redraw is due
    pub fn remaining(&self) -> Option<f32> {
        self.debounce.borrow().remaining()
    }

    /// Track a canvas resize; zero sizes (minimized windows) are ignored
    pub fn resize(&self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.element.set_size(width, height);
        self.camera.borrow_mut().update_projection_matrix();
        self.request_redraw();
    }

    pub fn dispose(&mut self) {
        if let Some(mut panel) = self.panel.take() {
            panel.dispose();
        }
        self.camera.borrow_mut().dispose();
        self.controller.dispose();
        self.debounce.borrow_mut().cancel();
    }
}

impl Drop for CameraRig {
    fn drop(&mut self) {
        self.dispose();
    }
}
