use super::types::{Toast, ToastId, ToastPhase, ToastTiming};
use crate::common::ToastKind;
use std::time::Duration;

/// Live toasts in insertion order.
///
/// Toasts are independent: there is no de-duplication and no queueing, so
/// two pushes always produce two entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn push(&mut self, message: String, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.toasts.push(Toast {
            id,
            message,
            kind,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Move a toast to the phase matching `elapsed` since it was pushed.
    ///
    /// Returns the resulting phase, or `None` if the toast is already gone
    /// (removed or dismissed). A toast reaching [`ToastPhase::Removed`] is
    /// dropped from the stack.
    pub fn advance(
        &mut self,
        id: ToastId,
        elapsed: Duration,
        timing: &ToastTiming,
    ) -> Option<ToastPhase> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        let phase = self.toasts[index].phase.max(timing.phase_at(elapsed));

        if phase == ToastPhase::Removed {
            self.toasts.remove(index);
        } else {
            self.toasts[index].phase = phase;
        }
        Some(phase)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }
}
