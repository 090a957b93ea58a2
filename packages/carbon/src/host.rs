use crate::{FloatingMenu, Rect, Result};

/// The element a component is rendered into.
pub trait Host {
    type Menu: FloatingMenu;

    fn attribute(&self, name: &str) -> Option<String>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&self, name: &str) -> Result<()>;

    fn has_shadow_root(&self) -> bool;

    fn attach_shadow_root(&self) -> Result<()>;

    /// Replace the contents of the shadow root with `markup`.
    fn render(&self, markup: &str) -> Result<()>;

    /// The first direct child that is a floating menu.
    fn find_floating_menu(&self) -> Option<Self::Menu>;

    fn is_child(&self, menu: &Self::Menu) -> bool;

    /// Bounding rectangle of the first shadow root element matching
    /// `selector`.
    fn shadow_bounds(&self, selector: &str) -> Option<Rect>;
}
