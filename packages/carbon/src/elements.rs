//! [`silkenweb`] builders for the elements registered by
//! [`define`](crate::define).

use js_sys::Reflect;
use silkenweb::{
    custom_html_element,
    dom::{DefaultDom, Dom},
    node::element::ElementHandle,
    parent_element,
    prelude::Element,
};
use wasm_bindgen::{prelude::wasm_bindgen, JsCast, JsValue};
use web_sys::DomRect;

use crate::{template::SELECTOR_TRIGGER, Error, Rect, Result};

/// The tag of [`tooltip`] elements.
pub const TOOLTIP_TAG: &str = "bx-tooltip";

custom_html_element!(
    tooltip("bx-tooltip") = {
        dom_type: web_sys::HtmlElement;

        attributes {
            open: bool,
        };
    }
);

parent_element!(tooltip);

impl<D: Dom> Tooltip<D> {
    pub fn control(&self) -> Control<D> {
        Control(self.handle())
    }
}

#[wasm_bindgen]
extern "C" {
    type TooltipProperties;

    #[wasm_bindgen(method, getter)]
    fn open(this: &TooltipProperties) -> bool;

    #[wasm_bindgen(method, setter)]
    fn set_open(this: &TooltipProperties, open: bool);
}

/// Drive a mounted tooltip through its element properties.
pub struct Control<D: Dom = DefaultDom>(ElementHandle<D, web_sys::HtmlElement>);

impl<D: Dom> Clone for Control<D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<D: Dom> Control<D> {
    pub fn is_open(&self) -> bool {
        self.0
            .dom_element()
            .unchecked_ref::<TooltipProperties>()
            .open()
    }

    pub fn set_open(&self, open: bool) {
        self.0
            .dom_element()
            .unchecked_ref::<TooltipProperties>()
            .set_open(open)
    }

    pub fn toggle(&self) {
        self.set_open(!self.is_open())
    }

    pub fn trigger_position(&self) -> Result<Rect> {
        let position = Reflect::get(
            &self.0.dom_element(),
            &JsValue::from_str("triggerPosition"),
        )
        .map_err(|_| Error::TriggerNotFound {
            selector: SELECTOR_TRIGGER,
        })?;
        let rect: DomRect = position.dyn_into()?;

        Ok(rect.into())
    }
}
