pub mod clock;
pub mod controller;
pub mod element;
pub mod gesture;
pub mod input_adapter;
pub mod timer;

pub use clock::Clock;
pub use controller::{drag_intent, wheel_intent, CameraInputController};
pub use element::{
    Document, Element, ElementEvent, EventKind, ListenerId, Modifiers, PointerSample, RawInput,
    WeakElement,
};
pub use gesture::{
    ButtonState, DragDetail, GestureHandler, MoveDetail, PointerDelta, PointerPosition,
};
pub use input_adapter::{deliver, WinitInputAdapter};
pub use timer::Debounce;
