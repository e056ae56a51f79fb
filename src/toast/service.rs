use super::platforms::sleep;
use super::stack::ToastStack;
use super::types::{Toast, ToastId, ToastPhase, ToastTiming};
use crate::common::{FlashMessage, ToastKind};
use dioxus::prelude::*;
use std::collections::HashMap;

/// Notification capability handed to any component through context.
///
/// Each toast gets one task that sleeps through the visible and fading
/// phases and feeds the elapsed time to the stack. Tasks live on the root
/// scope, so a toast outlives the component that raised it.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastService {
    stack: Signal<ToastStack>,
    tasks: Signal<HashMap<ToastId, Task>>,
    timing: ToastTiming,
}

impl ToastService {
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let message = message.into();
        let mut stack = self.stack;
        let mut tasks = self.tasks;
        let timing = self.timing;

        tracing::debug!("Showing {} toast: {}", kind.as_str(), message);
        let id = stack.write().push(message, kind);

        let task = spawn_forever(async move {
            sleep(timing.visible_for).await;
            stack.write().advance(id, timing.visible_for, &timing);

            sleep(timing.fade_for).await;
            if let Some(ToastPhase::Removed) = stack.write().advance(id, timing.lifetime(), &timing) {
                tracing::debug!("Removed {}", id);
            }
            tasks.write().remove(&id);
        });

        match task {
            Some(task) => {
                tasks.write().insert(id, task);
            }
            None => tracing::warn!("No runtime to schedule removal of {}", id),
        }
        id
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.show(message, ToastKind::default())
    }

    /// Cancel the pending transitions of a toast and remove it right away.
    pub fn dismiss(&self, id: ToastId) {
        let mut stack = self.stack;
        let mut tasks = self.tasks;

        if let Some(task) = tasks.write().remove(&id) {
            task.cancel();
        }
        if stack.write().dismiss(id) {
            tracing::debug!("Dismissed {}", id);
        }
    }

    pub fn show_flashes(&self, flashes: &[FlashMessage]) {
        for flash in flashes {
            self.show(flash.message(), flash.kind());
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.stack.read().iter().cloned().collect()
    }

    #[cfg(test)]
    fn has_pending_task(&self, id: ToastId) -> bool {
        self.tasks.read().contains_key(&id)
    }
}

/// Create the toast stack and provide the service to all descendants.
pub fn use_toast_provider(timing: ToastTiming) -> ToastService {
    let stack = use_signal(ToastStack::default);
    let tasks = use_signal(HashMap::new);
    use_context_provider(|| ToastService {
        stack,
        tasks,
        timing,
    })
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>()
}
