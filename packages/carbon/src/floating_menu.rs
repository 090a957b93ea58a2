use crate::Result;

/// An element that shows and positions the content of a trigger.
///
/// Any child of a trigger implementing this is treated as its menu body.
pub trait FloatingMenu {
    fn set_open(&mut self, open: bool);
}

/// The element that opens a [`FloatingMenu`].
pub trait FloatingMenuTrigger {
    /// The position of the trigger button in the viewport.
    fn trigger_position(&self) -> Result<Rect>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<web_sys::DomRect> for Rect {
    fn from(rect: web_sys::DomRect) -> Self {
        Self {
            x: rect.x(),
            y: rect.y(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}
