// Platform-specific timers
#[cfg(not(feature = "web"))]
mod common;
#[cfg(feature = "web")]
mod web;

#[cfg(not(feature = "web"))]
pub use common::sleep;
#[cfg(feature = "web")]
pub use web::sleep;
