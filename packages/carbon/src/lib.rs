//! Carbon flavoured web components for [`silkenweb`] apps.
//!
//! The only component so far is the tooltip trigger, `<bx-tooltip>`. Call
//! [`define`] once at startup to register it with the browser, then use it
//! from markup or through the [`elements`] builders.

pub mod attribute;
pub mod dom;
pub mod element;
pub mod elements;
pub mod error;
pub mod floating_menu;
pub mod host;
pub mod listener;
pub mod logging;
pub mod settings;
pub mod shared;
pub mod template;
pub mod tooltip;

#[cfg(test)]
mod testing;

pub use element::define;
pub use error::{Error, Result};
pub use floating_menu::{FloatingMenu, FloatingMenuTrigger, Rect};
pub use host::Host;
pub use listener::HostListener;
pub use settings::Settings;
pub use tooltip::TooltipTrigger;
