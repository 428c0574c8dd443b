//! Invertible capabilities and their registry
//!
//! Functions and operations with an inverse (sin/arcsin, x^n/n-th root) are
//! registered with the engine, which broadcasts its inverted flag to them.

use std::fmt;
use std::rc::Rc;
use tracing::trace;

/// A capability that toggles between a normal and an inverse behaviour
pub trait Invertible: fmt::Debug {
    /// Switches to the inverse (`true`) or normal (`false`) behaviour
    fn set_inverted(&self, inverted: bool);

    /// Returns whether the inverse behaviour is active
    fn is_inverted(&self) -> bool;
}

/// Shared handle to a registered capability
pub type InvertibleHandle = Rc<dyn Invertible>;

/// Set of capabilities notified whenever the engine's inverted flag changes
#[derive(Debug, Default)]
pub struct InvertibleRegistry {
    handles: Vec<InvertibleHandle>,
}

impl InvertibleRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability. Registering the same handle twice is a no-op.
    pub fn register(&mut self, handle: InvertibleHandle) {
        if !self.contains(&handle) {
            self.handles.push(handle);
        }
    }

    /// Removes a capability, returning whether it was registered
    pub fn deregister(&mut self, handle: &InvertibleHandle) -> bool {
        let before = self.handles.len();
        self.handles.retain(|h| !same_handle(h, handle));
        self.handles.len() != before
    }

    /// Returns true if the handle is registered
    #[must_use]
    pub fn contains(&self, handle: &InvertibleHandle) -> bool {
        self.handles.iter().any(|h| same_handle(h, handle))
    }

    /// Number of registered capabilities
    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if nothing is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Pushes `inverted` to every registered capability.
    ///
    /// Iterates over a snapshot, so the set seen by the broadcast is the one
    /// registered when it started.
    pub fn broadcast(&self, inverted: bool) {
        let snapshot = self.handles.clone();
        trace!(inverted, count = snapshot.len(), "broadcasting inverted flag");
        for handle in &snapshot {
            handle.set_inverted(inverted);
        }
    }
}

// Compares data pointers only; vtable pointers may differ across codegen units.
fn same_handle(a: &InvertibleHandle, b: &InvertibleHandle) -> bool {
    Rc::as_ptr(a).cast::<()>() == Rc::as_ptr(b).cast::<()>()
}
