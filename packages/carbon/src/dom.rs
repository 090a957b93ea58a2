//! Browser DOM implementations of [`Host`], [`FloatingMenu`] and
//! [`HostListener`].

use js_sys::Reflect;
use log::error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, Node, ShadowRootInit, ShadowRootMode};

use crate::{attribute::Attribute, Error, FloatingMenu, Host, HostListener, Rect, Result};

/// Static property on an element's constructor marking it as a floating menu.
pub const FLOATING_MENU_MARKER: &str = "FLOATING_MENU";

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[derive(Clone)]
pub struct DomHost(HtmlElement);

impl DomHost {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl Host for DomHost {
    type Menu = DomFloatingMenu;

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<()> {
        Ok(self.0.set_attribute(name, value)?)
    }

    fn remove_attribute(&self, name: &str) -> Result<()> {
        Ok(self.0.remove_attribute(name)?)
    }

    fn has_shadow_root(&self) -> bool {
        self.0.shadow_root().is_some()
    }

    fn attach_shadow_root(&self) -> Result<()> {
        self.0
            .attach_shadow(&ShadowRootInit::new(ShadowRootMode::Open))?;
        Ok(())
    }

    fn render(&self, markup: &str) -> Result<()> {
        let shadow_root = self
            .0
            .shadow_root()
            .ok_or_else(|| Error::Dom("Element has no open shadow root".to_owned()))?;
        shadow_root.set_inner_html(markup);
        Ok(())
    }

    fn find_floating_menu(&self) -> Option<DomFloatingMenu> {
        let children = self.0.child_nodes();

        (0..children.length())
            .filter_map(|index| children.item(index))
            .find_map(|node| DomFloatingMenu::from_node(&node))
    }

    fn is_child(&self, menu: &DomFloatingMenu) -> bool {
        let host: &Element = &self.0;
        menu.0.parent_element().as_ref() == Some(host)
    }

    fn shadow_bounds(&self, selector: &str) -> Option<Rect> {
        let trigger = self.0.shadow_root()?.query_selector(selector).ok()??;
        Some(trigger.get_bounding_client_rect().into())
    }
}

/// A floating menu element defined in JavaScript.
///
/// Its constructor must carry a truthy [`FLOATING_MENU_MARKER`], and it must
/// have a settable `open` property.
#[derive(Clone)]
pub struct DomFloatingMenu(Element);

impl DomFloatingMenu {
    pub fn from_node(node: &Node) -> Option<Self> {
        let element = node.dyn_ref::<Element>()?;
        let constructor = Reflect::get(element, &JsValue::from_str("constructor")).ok()?;
        let marker = Reflect::get(&constructor, &JsValue::from_str(FLOATING_MENU_MARKER)).ok()?;

        marker.is_truthy().then(|| Self(element.clone()))
    }

    fn open_key() -> JsValue {
        JsValue::from_str(Attribute::Open.as_ref())
    }
}

impl FloatingMenu for DomFloatingMenu {
    fn set_open(&mut self, open: bool) {
        if let Err(e) = Reflect::set(&self.0, &Self::open_key(), &JsValue::from_bool(open)) {
            error!("Couldn't set `open` on menu body: {e:?}");
        }
    }
}

/// Calls a handler when the host is clicked.
pub struct ClickListener {
    target: HtmlElement,
    handler: Closure<dyn FnMut(Event)>,
    attached: bool,
}

impl ClickListener {
    const EVENT: &'static str = "click";

    pub fn new(target: HtmlElement, mut on_click: impl FnMut() + 'static) -> Self {
        Self {
            target,
            handler: Closure::new(move |_event: Event| on_click()),
            attached: false,
        }
    }
}

impl HostListener for ClickListener {
    fn attach(&mut self) -> Result<()> {
        self.target
            .add_event_listener_with_callback(Self::EVENT, self.handler.as_ref().unchecked_ref())?;
        self.attached = true;
        Ok(())
    }

    fn detach(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(Self::EVENT, self.handler.as_ref().unchecked_ref())
        {
            error!("Couldn't remove `{}` listener: {e:?}", Self::EVENT);
        }

        self.attached = false;
    }

    fn is_attached(&self) -> bool {
        self.attached
    }
}
