//! InputGate: turns the advance gesture into a one-shot redraw request.
//!
//! The only recognised gesture is releasing the primary pointer button while
//! the configured modifier (Ctrl by default) is held. Everything else is
//! ignored.

use std::sync::Arc;

use eframe::egui;
use log::debug;

use crate::data::gesture::Modifier;

use super::state::PipelineState;

pub struct InputGate {
    state: Arc<PipelineState>,
    modifier: Modifier,
}

impl InputGate {
    pub(crate) fn new(state: Arc<PipelineState>) -> Self {
        Self {
            state,
            modifier: Modifier::Ctrl,
        }
    }

    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    pub fn set_modifier(&mut self, modifier: Modifier) {
        self.modifier = modifier;
    }

    /// Handle a pointer-button release. Returns `true` if it requested an advance.
    pub fn on_pointer_release(&self, button: egui::PointerButton, mods: &egui::Modifiers) -> bool {
        if button != egui::PointerButton::Primary || !self.modifier.matches(mods) {
            return false;
        }
        self.state.request_advance();
        debug!("advance requested ({}+click)", self.modifier);
        true
    }

    /// Handle a raw egui input event. Returns `true` if it requested an advance.
    pub fn handle_event(&self, event: &egui::Event) -> bool {
        match event {
            egui::Event::PointerButton {
                button,
                pressed: false,
                modifiers,
                ..
            } => self.on_pointer_release(*button, modifiers),
            _ => false,
        }
    }

    /// Feed a frame's worth of events. Returns how many requested an advance.
    pub fn handle_events<'a, I>(&self, events: I) -> usize
    where
        I: IntoIterator<Item = &'a egui::Event>,
    {
        events
            .into_iter()
            .filter(|ev| self.handle_event(ev))
            .count()
    }
}
