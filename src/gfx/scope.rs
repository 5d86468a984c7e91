//! Scoped pipeline state
//!
//! Each guard performs its state change on construction and undoes it when
//! dropped, so early returns cannot leak an enabled capability or a pushed
//! matrix into sibling widgets.
//!
//! Guards dereference to the wrapped backend and can be nested; they are
//! released in reverse declaration order:
//!
//! ```ignore
//! let mut depth = EnabledGuard::new(gfx, Capability::DepthTest);
//! depth.clear_depth();
//! let mut matrix = MatrixGuard::new(&mut *depth);
//! matrix.translate(20.0, 20.0, 0.0);
//! // pop, then disable depth test
//! ```

use std::ops::{Deref, DerefMut};

use super::{Capability, Graphics};

/// Keeps a capability enabled for the guard's lifetime.
pub struct EnabledGuard<'a, G: Graphics + ?Sized> {
    gfx: &'a mut G,
    capability: Capability,
}

impl<'a, G: Graphics + ?Sized> EnabledGuard<'a, G> {
    pub fn new(gfx: &'a mut G, capability: Capability) -> Self {
        gfx.enable(capability);
        EnabledGuard { gfx, capability }
    }
}

impl<G: Graphics + ?Sized> Deref for EnabledGuard<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.gfx
    }
}

impl<G: Graphics + ?Sized> DerefMut for EnabledGuard<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.gfx
    }
}

impl<G: Graphics + ?Sized> Drop for EnabledGuard<'_, G> {
    fn drop(&mut self) {
        self.gfx.disable(self.capability);
    }
}

/// Pushes the matrix stack on creation and pops it on drop.
pub struct MatrixGuard<'a, G: Graphics + ?Sized> {
    gfx: &'a mut G,
}

impl<'a, G: Graphics + ?Sized> MatrixGuard<'a, G> {
    pub fn new(gfx: &'a mut G) -> Self {
        gfx.push_matrix();
        MatrixGuard { gfx }
    }
}

impl<G: Graphics + ?Sized> Deref for MatrixGuard<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.gfx
    }
}

impl<G: Graphics + ?Sized> DerefMut for MatrixGuard<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.gfx
    }
}

impl<G: Graphics + ?Sized> Drop for MatrixGuard<'_, G> {
    fn drop(&mut self) {
        self.gfx.pop_matrix();
    }
}
