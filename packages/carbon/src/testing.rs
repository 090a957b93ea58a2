use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::{Error, FloatingMenu, Host, HostListener, Rect, Result};

/// An element that lives in memory, with just enough layout to answer
/// bounds queries.
#[derive(Clone, Default)]
pub struct MemoryHost(Rc<RefCell<MemoryElement>>);

#[derive(Default)]
struct MemoryElement {
    attributes: BTreeMap<String, String>,
    shadow_root: Option<String>,
    shadow_roots_attached: usize,
    children: Vec<Child>,
    trigger_bounds: Rect,
    fail_writes: bool,
}

#[derive(Clone)]
enum Child {
    Text,
    /// An element without the floating menu capability.
    Element,
    Menu(MemoryMenu),
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_text(self) -> Self {
        self.0.borrow_mut().children.push(Child::Text);
        self
    }

    pub fn with_element(self) -> Self {
        self.0.borrow_mut().children.push(Child::Element);
        self
    }

    pub fn with_menu(self, menu: &MemoryMenu) -> Self {
        self.0.borrow_mut().children.push(Child::Menu(menu.clone()));
        self
    }

    pub fn with_trigger_bounds(self, bounds: Rect) -> Self {
        self.0.borrow_mut().trigger_bounds = bounds;
        self
    }

    pub fn remove_menu(&self, menu: &MemoryMenu) {
        self.0
            .borrow_mut()
            .children
            .retain(|child| !matches!(child, Child::Menu(m) if m.same(menu)));
    }

    /// Make every later attribute write fail.
    pub fn fail_writes(&self) {
        self.0.borrow_mut().fail_writes = true;
    }

    fn check_write(&self) -> Result<()> {
        if self.0.borrow().fail_writes {
            Err(Error::Dom("write rejected".to_owned()))
        } else {
            Ok(())
        }
    }

    pub fn shadow_root(&self) -> Option<String> {
        self.0.borrow().shadow_root.clone()
    }

    pub fn shadow_roots_attached(&self) -> usize {
        self.0.borrow().shadow_roots_attached
    }
}

impl Host for MemoryHost {
    type Menu = MemoryMenu;

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        self.check_write()?;
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        self.check_write()?;
        self.0.borrow_mut().attributes.remove(name);
        Ok(())
    }

    fn has_shadow_root(&self) -> bool {
        self.0.borrow().shadow_root.is_some()
    }

    fn attach_shadow_root(&self) -> Result<()> {
        let mut elem = self.0.borrow_mut();
        elem.shadow_root = Some(String::new());
        elem.shadow_roots_attached += 1;
        Ok(())
    }

    fn render(&self, markup: &str) -> Result<()> {
        self.0.borrow_mut().shadow_root = Some(markup.to_owned());
        Ok(())
    }

    fn find_floating_menu(&self) -> Option<MemoryMenu> {
        self.0.borrow().children.iter().find_map(|child| match child {
            Child::Text | Child::Element => None,
            Child::Menu(menu) => Some(menu.clone()),
        })
    }

    fn is_child(&self, menu: &MemoryMenu) -> bool {
        self.0
            .borrow()
            .children
            .iter()
            .any(|child| matches!(child, Child::Menu(m) if m.same(menu)))
    }

    fn shadow_bounds(&self, selector: &str) -> Option<Rect> {
        let elem = self.0.borrow();
        let id = selector.strip_prefix('#')?;
        let markup = elem.shadow_root.as_ref()?;

        markup
            .contains(&format!(r#"id="{id}""#))
            .then_some(elem.trigger_bounds)
    }
}

type OnOpen = Rc<RefCell<Option<Box<dyn Fn(bool)>>>>;

/// A floating menu that can run a callback from its `open` setter, as a
/// script defined menu might.
#[derive(Clone, Default)]
pub struct MemoryMenu {
    open: Rc<Cell<bool>>,
    on_open: OnOpen,
}

impl MemoryMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_open(&self, handler: impl Fn(bool) + 'static) {
        *self.on_open.borrow_mut() = Some(Box::new(handler));
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.open, &other.open)
    }
}

impl FloatingMenu for MemoryMenu {
    fn set_open(&mut self, open: bool) {
        self.open.set(open);

        if let Some(handler) = self.on_open.borrow().as_ref() {
            handler(open);
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingListener(Rc<Cell<bool>>);

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HostListener for RecordingListener {
    fn attach(&mut self) -> Result<()> {
        self.0.set(true);
        Ok(())
    }

    fn detach(&mut self) {
        self.0.set(false);
    }

    fn is_attached(&self) -> bool {
        self.0.get()
    }
}
