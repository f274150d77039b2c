use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::{Error, Result};

/// Bounds and increment of a numeric binding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamSpec {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp to bounds and snap to the step grid
    ///
    /// Values already on the grid (within float error) are kept unchanged.
    pub fn constrain(&self, value: f32) -> f32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0.0 {
            return clamped;
        }

        let snapped = ((clamped / self.step).round() * self.step).clamp(self.min, self.max);
        if (snapped - clamped).abs() <= f32::EPSILON * clamped.abs().max(1.0) {
            clamped
        } else {
            snapped
        }
    }
}

/// Snapshot of one binding, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub key: String,
    pub spec: ParamSpec,
    pub value: f32,
}

impl Binding {
    /// Dotted prefix used as a folder title, e.g. `camera.position`
    pub fn group(&self) -> Option<&str> {
        self.key.rsplit_once('.').map(|(group, _)| group)
    }

    pub fn label(&self) -> &str {
        self.key.rsplit_once('.').map_or(&self.key, |(_, label)| label)
    }
}

type ChangeListener = Rc<dyn Fn(&str, f32)>;

#[derive(Default)]
struct PaneInner {
    bindings: RefCell<Vec<Binding>>,
    listeners: RefCell<Vec<ChangeListener>>,
    disposed: Cell<bool>,
}

/// Reactive key/value editor
///
/// [`set`](Self::set) is the user-edit path: it constrains the value and
/// notifies listeners. [`refresh`](Self::refresh) mirrors external state into
/// the pane without notifying. Cloning shares the same pane.
#[derive(Clone, Default)]
pub struct ParamPane {
    inner: Rc<PaneInner>,
}

impl ParamPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_binding(&self, key: impl Into<String>, value: f32, spec: ParamSpec) {
        if self.inner.disposed.get() {
            return;
        }
        let key = key.into();
        let mut bindings = self.inner.bindings.borrow_mut();
        match bindings.iter_mut().find(|binding| binding.key == key) {
            Some(existing) => {
                existing.spec = spec;
                existing.value = value;
            }
            None => bindings.push(Binding { key, spec, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<f32> {
        self.inner
            .bindings
            .borrow()
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.value)
    }

    /// Apply a user edit; returns the stored (constrained) value
    pub fn set(&self, key: &str, value: f32) -> Result<f32> {
        let stored = {
            let mut bindings = self.inner.bindings.borrow_mut();
            let binding = bindings
                .iter_mut()
                .find(|binding| binding.key == key)
                .ok_or_else(|| Error::UnknownParameter(key.to_string()))?;
            binding.value = binding.spec.constrain(value);
            binding.value
        };

        let listeners: Vec<ChangeListener> = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener(key, stored);
        }
        Ok(stored)
    }

    /// Mirror an external value without notifying listeners
    pub fn refresh(&self, key: &str, value: f32) -> Result<()> {
        let mut bindings = self.inner.bindings.borrow_mut();
        let binding = bindings
            .iter_mut()
            .find(|binding| binding.key == key)
            .ok_or_else(|| Error::UnknownParameter(key.to_string()))?;
        binding.value = value;
        Ok(())
    }

    pub fn on_change(&self, listener: impl Fn(&str, f32) + 'static) {
        if self.inner.disposed.get() {
            return;
        }
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub fn bindings(&self) -> Vec<Binding> {
        self.inner.bindings.borrow().clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    /// Drop all bindings and listeners; later registrations are ignored
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.bindings.borrow_mut().clear();
        self.inner.listeners.borrow_mut().clear();
    }
}
