use futures_signals::signal::{Mutable, ReadOnlyMutable, Signal};
use log::debug;
use strum::IntoEnumIterator;

use crate::{
    attribute::{self, bool_text, parse_bool, Attribute},
    template::{SELECTOR_TRIGGER, TEMPLATE},
    Error, FloatingMenu, FloatingMenuTrigger, Host, HostListener, Rect, Result,
};

/// Trigger button of a tooltip.
///
/// `open` is held here and serialized to the `open` attribute whenever it
/// changes. Clicking toggles it, and the first floating menu among the host's
/// children is opened and closed to match.
pub struct TooltipTrigger<H: Host> {
    host: H,
    open: Mutable<bool>,
    menu_body: Option<H::Menu>,
    listeners: Vec<Box<dyn HostListener>>,
}

impl<H: Host> TooltipTrigger<H> {
    pub fn new(host: H) -> Self {
        let open = parse_bool(host.attribute(Attribute::Open.as_ref()).as_deref());

        Self {
            host,
            open: Mutable::new(open),
            menu_body: None,
            listeners: Vec::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Register a listener, attached while the host is connected.
    pub fn add_listener(&mut self, listener: impl HostListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn connected(&mut self) -> Result<()> {
        for attribute in Attribute::iter() {
            let name = attribute.as_ref();

            if let Some(default) = attribute.default_value() {
                if !self.host.has_attribute(name) {
                    self.host.set_attribute(name, default)?;
                }
            }
        }

        if !self.host.has_shadow_root() {
            self.host.attach_shadow_root()?;
            self.host.render(TEMPLATE)?;
        }

        for listener in &mut self.listeners {
            if !listener.is_attached() {
                listener.attach()?;
            }
        }

        debug!("Tooltip connected");
        Ok(())
    }

    pub fn disconnected(&mut self) {
        for listener in &mut self.listeners {
            if listener.is_attached() {
                listener.detach();
            }
        }

        debug!("Tooltip disconnected");
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open_signal(&self) -> impl Signal<Item = bool> {
        self.open.signal()
    }

    /// A view of `open` that can be read while the trigger is borrowed.
    pub fn read_open(&self) -> ReadOnlyMutable<bool> {
        self.open.read_only()
    }

    pub fn set_open(&mut self, open: bool) -> Result<()> {
        let old = self.is_open();

        if old == open {
            return Ok(());
        }

        attribute::reflect_bool(&self.host, Attribute::Open, open)?;
        self.open.set(open);
        self.attribute_changed(
            Attribute::Open.as_ref(),
            old.then_some(""),
            open.then_some(""),
        )
    }

    /// Handles `click` on the host.
    pub fn toggle(&mut self) -> Result<()> {
        self.set_open(!self.is_open())
    }

    pub fn menu_body(&self) -> Option<&H::Menu> {
        self.menu_body.as_ref()
    }

    pub fn attribute_changed(
        &mut self,
        name: &str,
        old: Option<&str>,
        current: Option<&str>,
    ) -> Result<()> {
        if old == current {
            return Ok(());
        }

        if Attribute::Open.is(name) {
            self.open.set_neq(parse_bool(current));
            self.resolve_menu_body();
        }

        let open = self.is_open();

        if let Some(menu_body) = &mut self.menu_body {
            menu_body.set_open(open);
        }

        self.host
            .set_attribute(Attribute::AriaExpanded.as_ref(), bool_text(open))
    }

    fn resolve_menu_body(&mut self) {
        if let Some(menu_body) = &self.menu_body {
            if self.host.is_child(menu_body) {
                return;
            }

            debug!("Menu body was removed from the tooltip");
            self.menu_body = None;
        }

        self.menu_body = self.host.find_floating_menu();

        if self.menu_body.is_none() {
            debug!("Tooltip has no menu body");
        }
    }
}

impl<H: Host> FloatingMenuTrigger for TooltipTrigger<H> {
    fn trigger_position(&self) -> Result<Rect> {
        trigger_position(&self.host)
    }
}

/// Locate the trigger icon in the shadow root of `host`.
pub fn trigger_position(host: &impl Host) -> Result<Rect> {
    host.shadow_bounds(SELECTOR_TRIGGER)
        .ok_or(Error::TriggerNotFound {
            selector: SELECTOR_TRIGGER,
        })
}
