use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};
use crate::traits::CameraIntent;

/// Raw event categories an element dispatches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerDown,
    PointerMove,
    PointerUp,
    PointerLeave,
    Wheel,
    ContextMenu,
}

/// Keyboard modifiers held while a pointer event was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer sample in element-local pixels
///
/// `buttons` is a bit mask: 1 = left, 2 = right, 4 = middle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub buttons: u16,
    pub modifiers: Modifiers,
}

impl PointerSample {
    pub fn new(x: f32, y: f32, buttons: u16) -> Self {
        Self {
            x,
            y,
            buttons,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Host input delivered to an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    PointerLeave(PointerSample),
    Wheel { delta_x: f32, delta_y: f32 },
    ContextMenu,
}

impl RawInput {
    pub fn kind(&self) -> EventKind {
        match self {
            RawInput::PointerDown(_) => EventKind::PointerDown,
            RawInput::PointerMove(_) => EventKind::PointerMove,
            RawInput::PointerUp(_) => EventKind::PointerUp,
            RawInput::PointerLeave(_) => EventKind::PointerLeave,
            RawInput::Wheel { .. } => EventKind::Wheel,
            RawInput::ContextMenu => EventKind::ContextMenu,
        }
    }
}

/// Event handed to listeners during dispatch
#[derive(Debug)]
pub struct ElementEvent {
    input: RawInput,
    default_prevented: bool,
}

impl ElementEvent {
    pub fn input(&self) -> &RawInput {
        &self.input
    }

    /// Suppress the host's default action (scrolling, context menu)
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type InputListener = Rc<dyn Fn(&mut ElementEvent)>;
type IntentListener = Rc<dyn Fn(CameraIntent)>;

enum Listener {
    Input(EventKind, InputListener),
    Intent(IntentListener),
}

struct ElementInner {
    id: String,
    size: Cell<(u32, u32)>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_id: Cell<u64>,
}

/// DOM-like event target standing in for the render canvas
///
/// Cloning yields another handle to the same element. Raw input and camera
/// intents travel on separate channels; listeners run in registration order
/// against a snapshot taken when dispatch starts.
#[derive(Clone)]
pub struct Element {
    inner: Rc<ElementInner>,
}

impl Element {
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id: id.into(),
                size: Cell::new((width, height)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.inner.id
    }

    pub fn size(&self) -> (u32, u32) {
        self.inner.size.get()
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.inner.size.set((width, height));
    }

    /// Width over height; infinite for a zero-height element
    pub fn aspect_ratio(&self) -> f32 {
        let (width, height) = self.size();
        width as f32 / height as f32
    }

    pub fn add_listener(
        &self,
        kind: EventKind,
        listener: impl Fn(&mut ElementEvent) + 'static,
    ) -> ListenerId {
        self.push(Listener::Input(kind, Rc::new(listener)))
    }

    pub fn add_intent_listener(&self, listener: impl Fn(CameraIntent) + 'static) -> ListenerId {
        self.push(Listener::Intent(Rc::new(listener)))
    }

    /// Returns false when `id` is not registered
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Dispatch raw input; returns true if a listener prevented the default
    pub fn dispatch(&self, input: RawInput) -> bool {
        let kind = input.kind();
        let targets: Vec<InputListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter_map(|(_, listener)| match listener {
                Listener::Input(listens_for, callback) if *listens_for == kind => {
                    Some(Rc::clone(callback))
                }
                _ => None,
            })
            .collect();

        let mut event = ElementEvent {
            input,
            default_prevented: false,
        };
        for callback in targets {
            callback(&mut event);
        }
        event.default_prevented
    }

    pub fn dispatch_intent(&self, intent: CameraIntent) {
        let targets: Vec<IntentListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .filter_map(|(_, listener)| match listener {
                Listener::Intent(callback) => Some(Rc::clone(callback)),
                _ => None,
            })
            .collect();

        log::trace!("{}: {:?} -> {} listener(s)", self.id(), intent, targets.len());
        for callback in targets {
            callback(intent);
        }
    }

    pub fn downgrade(&self) -> WeakElement {
        WeakElement {
            inner: Rc::downgrade(&self.inner),
        }
    }

    fn push(&self, listener: Listener) -> ListenerId {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.listeners.borrow_mut().push((id, listener));
        id
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("size", &self.size())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Non-owning element handle held by listeners registered on that element
#[derive(Clone)]
pub struct WeakElement {
    inner: Weak<ElementInner>,
}

impl WeakElement {
    pub fn upgrade(&self) -> Option<Element> {
        self.inner.upgrade().map(|inner| Element { inner })
    }
}

/// Registry resolving elements by id
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any previous one with the same id
    pub fn insert(&mut self, element: Element) -> Element {
        self.elements
            .insert(element.id().to_string(), element.clone());
        element
    }

    pub fn element(&self, id: &str) -> Result<Element> {
        self.elements
            .get(id)
            .cloned()
            .ok_or_else(|| Error::MissingElement(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_dispatch_runs_listeners_in_order() {
        let element = Element::new("canvas", 800, 600);
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = log.clone();
            element.add_listener(EventKind::PointerDown, move |_| log.borrow_mut().push(tag));
        }
        let other = log.clone();
        element.add_listener(EventKind::PointerUp, move |_| other.borrow_mut().push("up"));

        element.dispatch(RawInput::PointerDown(PointerSample::new(1.0, 2.0, 1)));

        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_prevent_default_is_reported() {
        let element = Element::new("canvas", 800, 600);
        element.add_listener(EventKind::ContextMenu, |event| event.prevent_default());

        assert!(element.dispatch(RawInput::ContextMenu));
        assert!(!element.dispatch(RawInput::Wheel {
            delta_x: 0.0,
            delta_y: 1.0
        }));
    }

    #[test]
    fn test_remove_listener() {
        let element = Element::new("canvas", 800, 600);
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let id = element.add_listener(EventKind::PointerMove, move |_| {
            counter.set(counter.get() + 1)
        });

        element.dispatch(RawInput::PointerMove(PointerSample::default()));
        assert!(element.remove_listener(id));
        assert!(!element.remove_listener(id));
        element.dispatch(RawInput::PointerMove(PointerSample::default()));

        assert_eq!(hits.get(), 1);
        assert_eq!(element.listener_count(), 0);
    }

    #[test]
    fn test_listener_may_register_during_dispatch() {
        let element = Element::new("canvas", 800, 600);
        let handle = element.downgrade();
        element.add_listener(EventKind::PointerDown, move |_| {
            if let Some(element) = handle.upgrade() {
                element.add_listener(EventKind::PointerDown, |_| {});
            }
        });

        element.dispatch(RawInput::PointerDown(PointerSample::default()));

        assert_eq!(element.listener_count(), 2);
    }

    #[test]
    fn test_intents_only_reach_intent_listeners() {
        let element = Element::new("canvas", 800, 600);
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        element.add_intent_listener(move |intent| sink.borrow_mut().push(intent));
        element.add_listener(EventKind::PointerMove, |_| panic!("raw listener called"));

        element.dispatch_intent(CameraIntent::Move(Vec3::X));

        assert_eq!(*received.borrow(), vec![CameraIntent::Move(Vec3::X)]);
    }

    #[test]
    fn test_aspect_ratio_follows_resize() {
        let element = Element::new("canvas", 800, 400);
        assert_eq!(element.aspect_ratio(), 2.0);

        element.set_size(300, 300);
        assert_eq!(element.aspect_ratio(), 1.0);
    }

    #[test]
    fn test_document_missing_element() {
        let mut document = Document::new();
        document.insert(Element::new("webgpu-canvas", 640, 480));

        assert!(document.element("webgpu-canvas").is_ok());
        match document.element("nope") {
            Err(Error::MissingElement(id)) => assert_eq!(id, "nope"),
            other => panic!("unexpected: {:?}", other.map(|e| e.id().to_string())),
        }
    }
}
