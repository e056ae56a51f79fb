use crate::common::ToastKind;
use crate::config::UiConfig;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

// Lifecycle of a toast. Phases only ever move forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ToastPhase {
    Visible,
    Fading,
    Removed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub visible_for: Duration,
    pub fade_for: Duration,
}

impl Default for ToastTiming {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for ToastTiming {
    fn from(config: &UiConfig) -> Self {
        Self {
            visible_for: config.visible_for(),
            fade_for: config.fade_for(),
        }
    }
}

impl ToastTiming {
    /// Phase a toast should be in once `elapsed` has passed since insertion.
    pub fn phase_at(&self, elapsed: Duration) -> ToastPhase {
        if elapsed < self.visible_for {
            ToastPhase::Visible
        } else if elapsed < self.visible_for + self.fade_for {
            ToastPhase::Fading
        } else {
            ToastPhase::Removed
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.visible_for + self.fade_for
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn opacity(&self) -> &'static str {
        match self.phase {
            ToastPhase::Visible => "1",
            ToastPhase::Fading | ToastPhase::Removed => "0",
        }
    }
}
