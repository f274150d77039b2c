use std::cell::RefCell;
use std::rc::Rc;

use super::element::{Element, ElementEvent, EventKind, ListenerId, Modifiers, PointerSample, RawInput};

const LEFT_BUTTON: u16 = 1;
const RIGHT_BUTTON: u16 = 2;
const MIDDLE_BUTTON: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerDelta {
    pub delta_x: f32,
    pub delta_y: f32,
}

/// Button and modifier snapshot captured per event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub left_button: bool,
    pub right_button: bool,
    pub middle_button: bool,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub meta_key: bool,
}

impl ButtonState {
    pub fn from_bits(buttons: u16, modifiers: Modifiers) -> Self {
        Self {
            left_button: buttons & LEFT_BUTTON == LEFT_BUTTON,
            right_button: buttons & RIGHT_BUTTON == RIGHT_BUTTON,
            middle_button: buttons & MIDDLE_BUTTON == MIDDLE_BUTTON,
            shift_key: modifiers.shift,
            ctrl_key: modifiers.ctrl,
            alt_key: modifiers.alt,
            meta_key: modifiers.meta,
        }
    }
}

impl From<&PointerSample> for ButtonState {
    fn from(sample: &PointerSample) -> Self {
        Self::from_bits(sample.buttons, sample.modifiers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDetail {
    pub position: PointerPosition,
    pub delta: PointerDelta,
    pub buttons: ButtonState,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragDetail {
    pub start_pos: PointerPosition,
    pub current_pos: PointerPosition,
    pub delta: PointerDelta,
    pub buttons: ButtonState,
}

#[derive(Debug, Default)]
struct Session {
    position: PointerPosition,
    mouse_down: bool,
    dragging: bool,
    drag_start: PointerPosition,
}

type Callback<T> = Rc<dyn Fn(&T)>;

#[derive(Default)]
struct Shared {
    session: RefCell<Session>,
    moves: RefCell<Vec<Callback<MoveDetail>>>,
    clicks: RefCell<Vec<Callback<PointerPosition>>>,
    drags: RefCell<Vec<Callback<DragDetail>>>,
    wheels: RefCell<Vec<Callback<PointerDelta>>>,
}

/// Normalizes pointer and wheel input on an element into deltas, drags and clicks
///
/// A drag session opens on pointer-down and is confirmed by the first move
/// while the button is held; pointer-up reports a click only when no drag was
/// confirmed.
pub struct GestureHandler {
    element: Element,
    shared: Rc<Shared>,
    listeners: Vec<ListenerId>,
}

impl GestureHandler {
    pub fn new(element: &Element) -> Self {
        let shared = Rc::new(Shared::default());

        let listeners = [
            EventKind::PointerDown,
            EventKind::PointerMove,
            EventKind::PointerUp,
            EventKind::PointerLeave,
            EventKind::Wheel,
        ]
        .into_iter()
        .map(|kind| {
            let shared = Rc::clone(&shared);
            element.add_listener(kind, move |event| Self::handle(&shared, event))
        })
        .collect();

        Self {
            element: element.clone(),
            shared,
            listeners,
        }
    }

    pub fn on_move(&self, callback: impl Fn(&MoveDetail) + 'static) {
        self.shared.moves.borrow_mut().push(Rc::new(callback));
    }

    pub fn on_click(&self, callback: impl Fn(&PointerPosition) + 'static) {
        self.shared.clicks.borrow_mut().push(Rc::new(callback));
    }

    pub fn on_drag(&self, callback: impl Fn(&DragDetail) + 'static) {
        self.shared.drags.borrow_mut().push(Rc::new(callback));
    }

    pub fn on_wheel(&self, callback: impl Fn(&PointerDelta) + 'static) {
        self.shared.wheels.borrow_mut().push(Rc::new(callback));
    }

    pub fn position(&self) -> PointerPosition {
        self.shared.session.borrow().position
    }

    pub fn is_dragging(&self) -> bool {
        self.shared.session.borrow().dragging
    }

    /// Detach from the element and drop every callback
    pub fn dispose(&mut self) {
        for id in self.listeners.drain(..) {
            self.element.remove_listener(id);
        }
        self.shared.moves.borrow_mut().clear();
        self.shared.clicks.borrow_mut().clear();
        self.shared.drags.borrow_mut().clear();
        self.shared.wheels.borrow_mut().clear();
        *self.shared.session.borrow_mut() = Session::default();
    }

    fn handle(shared: &Shared, event: &mut ElementEvent) {
        match *event.input() {
            RawInput::PointerMove(sample) => Self::handle_move(shared, &sample),
            RawInput::PointerDown(sample) => {
                let mut session = shared.session.borrow_mut();
                session.position = PointerPosition {
                    x: sample.x,
                    y: sample.y,
                };
                session.mouse_down = true;
                session.dragging = false;
                session.drag_start = session.position;
            }
            RawInput::PointerUp(_) => {
                let (was_dragging, position) = {
                    let mut session = shared.session.borrow_mut();
                    let state = (session.dragging, session.position);
                    session.mouse_down = false;
                    session.dragging = false;
                    state
                };
                if !was_dragging {
                    notify(&shared.clicks, &position);
                }
            }
            RawInput::PointerLeave(_) => {
                let mut session = shared.session.borrow_mut();
                session.mouse_down = false;
                session.dragging = false;
            }
            RawInput::Wheel { delta_x, delta_y } => {
                event.prevent_default();
                notify(&shared.wheels, &PointerDelta { delta_x, delta_y });
            }
            RawInput::ContextMenu => {}
        }
    }

    fn handle_move(shared: &Shared, sample: &PointerSample) {
        let buttons = ButtonState::from(sample);
        let (detail, drag) = {
            let mut session = shared.session.borrow_mut();
            let position = PointerPosition {
                x: sample.x,
                y: sample.y,
            };
            let delta = PointerDelta {
                delta_x: position.x - session.position.x,
                delta_y: position.y - session.position.y,
            };
            session.position = position;

            let drag = if session.mouse_down {
                session.dragging = true;
                Some(DragDetail {
                    start_pos: session.drag_start,
                    current_pos: position,
                    delta,
                    buttons,
                })
            } else {
                None
            };
            (
                MoveDetail {
                    position,
                    delta,
                    buttons,
                },
                drag,
            )
        };

        if let Some(drag) = drag {
            notify(&shared.drags, &drag);
        }
        notify(&shared.moves, &detail);
    }
}

impl Drop for GestureHandler {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn notify<T>(callbacks: &RefCell<Vec<Callback<T>>>, detail: &T) {
    let snapshot: Vec<Callback<T>> = callbacks.borrow().iter().cloned().collect();
    for callback in snapshot {
        callback(detail);
    }
}
