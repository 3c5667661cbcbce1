//! Feature toggles confirmed against the engine
//!
//! Each toggle keeps what the user asked for apart from what the engine
//! reports. The UI shows `confirmed_on`; `requested_on` only records the
//! click.

use crate::engine::ViewerEngine;
use ifckit_core::ToggleKind;

/// Requested vs engine-confirmed state of one toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    /// Flipped on every activation
    pub requested_on: bool,
    /// Engine-reported state after the last activation
    pub confirmed_on: bool,
}

/// The clipping, visibility and selection toggles
#[derive(Debug, Clone, Default)]
pub struct ToggleStateManager {
    clipping: ToggleState,
    visibility: ToggleState,
    selection: ToggleState,
}

impl ToggleStateManager {
    /// All toggles off
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of `kind`
    pub fn get(&self, kind: ToggleKind) -> ToggleState {
        match kind {
            ToggleKind::Clipping => self.clipping,
            ToggleKind::Visibility => self.visibility,
            ToggleKind::Selection => self.selection,
        }
    }

    fn slot(&mut self, kind: ToggleKind) -> &mut ToggleState {
        match kind {
            ToggleKind::Clipping => &mut self.clipping,
            ToggleKind::Visibility => &mut self.visibility,
            ToggleKind::Selection => &mut self.selection,
        }
    }

    /// Activate `kind` once and re-confirm it from the engine
    ///
    /// Only clipping has an engine-side switch. Visibility confirms from the
    /// engine's clipping flag and selection from its selection flag, both
    /// read after the action.
    pub fn activate<E>(&mut self, kind: ToggleKind, engine: &E) -> ToggleState
    where
        E: ViewerEngine + ?Sized,
    {
        let confirmed_on = match kind {
            ToggleKind::Clipping => {
                engine.toggle_clipping_planes();
                engine.is_clipping_active()
            }
            ToggleKind::Visibility => engine.is_clipping_active(),
            ToggleKind::Selection => engine.is_selection_active(),
        };

        let slot = self.slot(kind);
        let next = ToggleState {
            requested_on: !slot.requested_on,
            confirmed_on,
        };
        *slot = next;

        if next.requested_on != next.confirmed_on {
            tracing::debug!(
                "{} requested {} but engine reports {}",
                kind,
                next.requested_on,
                next.confirmed_on
            );
        }
        next
    }
}
