use wasm_bindgen::{prelude::Closure, JsCast};
use web_sys::{HtmlElement, HtmlInputElement};

use crate::bridge::get_document;

pub struct Element {
    element: web_sys::HtmlElement,
}

impl Element {
    pub fn by_id(id: &str) -> Option<Element> {
        get_document().ok()?.get_element_by_id(id).map(|e| Self {
            element: e.unchecked_into::<HtmlElement>(),
        })
    }

    pub fn set_text(&self, text: &str) {
        self.element.set_inner_text(text);
    }

    pub fn set_onclick(&mut self, handler: Box<dyn FnMut(web_sys::Event)>) {
        self.add_event_listener("click", handler);
    }

    pub fn set_oninput(&mut self, handler: Box<dyn FnMut(web_sys::Event)>) {
        self.add_event_listener("input", handler);
    }

    pub fn value_float(&self) -> f64 {
        self.as_input().value_as_number()
    }

    pub fn set_value_float(&self, value: f32) {
        self.as_input().set_value_as_number(value as f64);
    }

    fn add_event_listener(&mut self, on: &str, handler: Box<dyn FnMut(web_sys::Event)>) {
        let closure = Closure::wrap(handler);
        self.element
            .add_event_listener_with_callback(on, closure.as_ref().unchecked_ref())
            .ok();

        // Controls live as long as the page, so the listener is leaked.
        closure.forget();
    }

    fn as_input(&self) -> &HtmlInputElement {
        self.element.unchecked_ref::<HtmlInputElement>()
    }
}

impl Clone for Element {
    fn clone(&self) -> Self {
        Self {
            element: self.element.clone(),
        }
    }
}
