//! Registration of `<bx-tooltip>` as a custom element.

use std::rc::{Rc, Weak};

use js_sys::{Array, TypeError};
use log::debug;
use wasm_bindgen::{closure::Closure, prelude::wasm_bindgen, JsValue};
use web_sys::{DomRect, HtmlElement};

use crate::{
    attribute::Attribute,
    dom::{ClickListener, DomHost},
    elements,
    shared::SharedTrigger,
    Error, Result, Settings, TooltipTrigger,
};

#[wasm_bindgen(inline_js = r#"
export function defineTooltip(name, observedAttributes, create) {
    if (customElements.get(name)) {
        return false;
    }

    customElements.define(name, class extends HTMLElement {
        static get observedAttributes() { return observedAttributes; }

        constructor() {
            super();
            this._tooltip = create(this);
        }

        connectedCallback() { this._tooltip.connected(); }

        disconnectedCallback() { this._tooltip.disconnected(); }

        attributeChangedCallback(name, old, current) {
            this._tooltip.attributeChanged(name, old, current);
        }

        get open() { return this._tooltip.open; }

        set open(value) { this._tooltip.open = Boolean(value); }

        get triggerPosition() { return this._tooltip.triggerPosition(); }
    });

    return true;
}
"#)]
extern "C" {
    #[wasm_bindgen(js_name = defineTooltip)]
    fn define_tooltip(name: &str, observed_attributes: &Array, create: &JsValue) -> bool;
}

/// Register the tooltip element as `<{prefix}-tooltip>`.
///
/// The [`elements`] builders emit fixed tags, so only the prefix they use is
/// accepted. Defining an already defined element does nothing.
///
/// Each element's Rust state is owned by its JavaScript object. Build the
/// bindings with `wasm-bindgen --weak-refs` so it is freed along with the
/// element.
pub fn define(settings: &Settings) -> Result<()> {
    let name = tooltip_tag(settings)?;
    let observed_attributes = Array::of1(&JsValue::from_str(Attribute::Open.as_ref()));
    let create = Closure::<dyn FnMut(HtmlElement) -> JsValue>::new(|element: HtmlElement| {
        JsValue::from(TooltipElement::new(element))
    });

    if define_tooltip(&name, &observed_attributes, &create.into_js_value()) {
        debug!("Defined `<{name}>`");
    }

    Ok(())
}

fn tooltip_tag(settings: &Settings) -> Result<String> {
    let name = settings.tag_name("tooltip");

    if name == elements::TOOLTIP_TAG {
        Ok(name)
    } else {
        Err(Error::UnsupportedPrefix {
            prefix: settings.prefix().to_owned(),
            expected: Settings::DEFAULT_PREFIX,
        })
    }
}

/// The Rust side of a `<bx-tooltip>` instance.
#[wasm_bindgen]
pub struct TooltipElement {
    trigger: Rc<SharedTrigger<DomHost>>,
}

impl TooltipElement {
    fn new(element: HtmlElement) -> Self {
        let trigger = Rc::new_cyclic(|weak_trigger: &Weak<SharedTrigger<DomHost>>| {
            let weak_trigger = weak_trigger.clone();
            let mut trigger = TooltipTrigger::new(DomHost::new(element.clone()));

            trigger.add_listener(ClickListener::new(element, move || {
                if let Some(trigger) = weak_trigger.upgrade() {
                    trigger.toggle();
                }
            }));

            SharedTrigger::new(trigger)
        });

        Self { trigger }
    }
}

#[wasm_bindgen]
impl TooltipElement {
    pub fn connected(&self) {
        self.trigger.connected();
    }

    pub fn disconnected(&self) {
        self.trigger.disconnected();
    }

    #[wasm_bindgen(js_name = attributeChanged)]
    pub fn attribute_changed(&self, name: String, old: Option<String>, current: Option<String>) {
        self.trigger
            .attribute_changed(&name, old.as_deref(), current.as_deref());
    }

    #[wasm_bindgen(getter)]
    pub fn open(&self) -> bool {
        self.trigger.is_open()
    }

    #[wasm_bindgen(setter)]
    pub fn set_open(&self, open: bool) {
        self.trigger.set_open(open);
    }

    /// Throws a `TypeError` if the trigger icon isn't rendered.
    #[wasm_bindgen(js_name = triggerPosition)]
    pub fn trigger_position(&self) -> Result<DomRect, JsValue> {
        let rect = self
            .trigger
            .trigger_position()
            .map_err(|e| JsValue::from(TypeError::new(&e.to_string())))?;

        DomRect::new_with_x_and_y_and_width_and_height(rect.x, rect.y, rect.width, rect.height)
    }
}
