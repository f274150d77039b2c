use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase, WindowEvent};
use winit::keyboard::ModifiersState;

use super::element::{Element, Modifiers, PointerSample, RawInput};

/// Pixels per wheel line, matching what browsers report for one notch
pub const WHEEL_LINE_PIXELS: f32 = 100.0;

const PRIMARY_BUTTON: u16 = 1;

/// Adapter that bridges winit window events to raw element input
///
/// Tracks the pressed-button mask, modifiers and cursor position that winit
/// reports through separate events. Coordinates are logical pixels. A single
/// touch point is mapped onto the primary button.
#[derive(Debug, Clone)]
pub struct WinitInputAdapter {
    buttons: u16,
    modifiers: Modifiers,
    cursor: (f32, f32),
    scale_factor: f64,
    active_touch: Option<u64>,
}

impl WinitInputAdapter {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            buttons: 0,
            modifiers: Modifiers::default(),
            cursor: (0.0, 0.0),
            scale_factor,
            active_touch: None,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.scale_factor = scale_factor;
    }

    pub fn buttons(&self) -> u16 {
        self.buttons
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Translate and dispatch an event the UI may have captured
    ///
    /// Captured events still update tracked state. Of those, only the ones
    /// that close a pointer session reach the element, so a drag that ends
    /// over the UI is released on the canvas.
    pub fn route_event(&mut self, element: &Element, event: &WindowEvent, captured: bool) -> bool {
        match self.translate(event) {
            Some(input) => deliver(element, input, captured),
            None => false,
        }
    }

    /// Translate a winit event, updating tracked state
    pub fn translate(&mut self, event: &WindowEvent) -> Option<RawInput> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = map_modifiers(modifiers.state());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.to_logical(*position);
                Some(RawInput::PointerMove(self.sample()))
            }
            WindowEvent::CursorLeft { .. } => {
                self.buttons = 0;
                Some(RawInput::PointerLeave(self.sample()))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let bit = button_bit(*button)?;
                match state {
                    ElementState::Pressed => {
                        self.buttons |= bit;
                        Some(RawInput::PointerDown(self.sample()))
                    }
                    ElementState::Released => {
                        self.buttons &= !bit;
                        Some(RawInput::PointerUp(self.sample()))
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (delta_x, delta_y) = wheel_delta(*delta, self.scale_factor);
                Some(RawInput::Wheel { delta_x, delta_y })
            }
            WindowEvent::Touch(touch) => self.translate_touch(touch),
            _ => None,
        }
    }

    fn translate_touch(&mut self, touch: &Touch) -> Option<RawInput> {
        match (touch.phase, self.active_touch) {
            (TouchPhase::Started, None) => {
                self.active_touch = Some(touch.id);
                self.cursor = self.to_logical(touch.location);
                self.buttons |= PRIMARY_BUTTON;
                Some(RawInput::PointerDown(self.sample()))
            }
            (TouchPhase::Moved, Some(id)) if id == touch.id => {
                self.cursor = self.to_logical(touch.location);
                Some(RawInput::PointerMove(self.sample()))
            }
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(id)) if id == touch.id => {
                self.active_touch = None;
                self.buttons &= !PRIMARY_BUTTON;
                Some(RawInput::PointerUp(self.sample()))
            }
            _ => None,
        }
    }

    fn sample(&self) -> PointerSample {
        PointerSample::new(self.cursor.0, self.cursor.1, self.buttons)
            .with_modifiers(self.modifiers)
    }

    fn to_logical(&self, position: PhysicalPosition<f64>) -> (f32, f32) {
        let logical = position.to_logical::<f64>(self.scale_factor);
        (logical.x as f32, logical.y as f32)
    }
}

impl Default for WinitInputAdapter {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Dispatch unless the UI captured the input and it does not end a session
pub fn deliver(element: &Element, input: RawInput, captured: bool) -> bool {
    if captured && !ends_session(&input) {
        return false;
    }
    element.dispatch(input);
    true
}

pub fn ends_session(input: &RawInput) -> bool {
    matches!(input, RawInput::PointerUp(_) | RawInput::PointerLeave(_))
}

/// Button bit in the pointer mask; None for buttons the pipeline ignores
pub fn button_bit(button: MouseButton) -> Option<u16> {
    match button {
        MouseButton::Left => Some(1),
        MouseButton::Right => Some(2),
        MouseButton::Middle => Some(4),
        _ => None,
    }
}

/// Wheel delta in logical pixels, positive y scrolling towards the user
pub fn wheel_delta(delta: MouseScrollDelta, scale_factor: f64) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (-x * WHEEL_LINE_PIXELS, -y * WHEEL_LINE_PIXELS),
        MouseScrollDelta::PixelDelta(position) => {
            let logical = position.to_logical::<f64>(scale_factor);
            (-logical.x as f32, -logical.y as f32)
        }
    }
}

pub fn map_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}
