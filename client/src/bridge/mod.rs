use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::err;
use crate::render::{Gl, WebGlRenderer};
use crate::Res;

#[wasm_bindgen]
extern "C" {
    // Expose closures
    #[wasm_bindgen(js_name = expose_closure)]
    pub fn expose_closure_string_in(name: &str, closure: &Closure<dyn FnMut(String)>);

    #[wasm_bindgen(js_name = expose_closure)]
    pub fn expose_closure_string_out(name: &str, closure: &Closure<dyn FnMut() -> String>);
}

pub mod event;

struct Canvas {
    element: Rc<HtmlCanvasElement>,
    gl: Rc<Gl>,

    // Array where canvas events are stored to be handled by the core loop.
    events: Rc<Array>,
}

impl Canvas {
    fn new(element: HtmlCanvasElement) -> Res<Canvas> {
        let gl = Rc::new(create_context(&element)?);

        let canvas = Canvas {
            element: Rc::new(element),
            gl,
            events: Rc::new(Array::new()),
        };
        canvas.configure_events()?;

        Ok(canvas)
    }

    fn by_id(id: &str) -> Res<Canvas> {
        let element = match get_document()?.get_element_by_id(id) {
            Some(e) => e,
            None => return err(format!("Failed to retrieve <canvas> element #{id}.")),
        };

        match element.dyn_into::<HtmlCanvasElement>() {
            Ok(c) => Canvas::new(c),
            Err(_) => err("Couldn't cast Element to HtmlCanvas."),
        }
    }

    fn configure_events(&self) -> Res<()> {
        // Keyboard events only reach a focusable canvas.
        self.element.set_tab_index(0);

        for event_name in ["mouseenter", "mousedown"] {
            // Grab focus on mouse events
            let element = self.element.clone();
            let listener = Closure::wrap(Box::new(move |_event: web_sys::MouseEvent| {
                element.focus().ok();
            }) as Box<dyn FnMut(web_sys::MouseEvent)>);
            if self
                .element
                .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
                .is_err()
            {
                return err("Failed to add mouse event listener to canvas.");
            }
            listener.forget();
        }

        for event_name in ["mousedown", "mouseup", "mouseleave", "mousemove", "keydown"] {
            let events = self.events.clone();
            let listener = Closure::wrap(Box::new(move |event: web_sys::UiEvent| {
                events.push(&event);
            }) as Box<dyn FnMut(web_sys::UiEvent)>);

            if self
                .element
                .add_event_listener_with_callback(event_name, listener.as_ref().unchecked_ref())
                .is_err()
            {
                return err("Failed to add event listener to canvas.");
            }

            listener.forget();
        }

        Ok(())
    }
}

pub struct Context {
    // Holds information about the HTML canvas associated with the WebGL
    // context.
    canvas: Canvas,

    // Wrapper around OpenGL Rendering functions
    renderer: WebGlRenderer,
}

impl Context {
    pub fn new(canvas_id: &str) -> anyhow::Result<Context> {
        let canvas = Canvas::by_id(canvas_id).map_err(anyhow::Error::msg)?;
        let renderer = WebGlRenderer::new(canvas.gl.clone())?;
        let (w, h) = (canvas.element.width(), canvas.element.height());
        renderer.resize(w, h);

        Ok(Context { canvas, renderer })
    }

    pub fn viewport_size(&self) -> (u32, u32) {
        (self.canvas.element.width(), self.canvas.element.height())
    }

    pub fn events(&self) -> Option<Vec<event::InputEvent>> {
        if self.canvas.events.length() == 0 {
            return None;
        }

        // Array::shift so that events are handled in the order they arrived.
        let mut events = Vec::new();
        while self.canvas.events.length() > 0 {
            let event = self.canvas.events.shift();
            let event = event.unchecked_ref::<web_sys::UiEvent>();
            if let Some(e) = event::InputEvent::from_web_sys(event, &self.canvas.element) {
                events.push(e);
            };
        }

        match events.len() {
            0 => None,
            _ => Some(events),
        }
    }

    pub fn renderer(&mut self) -> &mut WebGlRenderer {
        &mut self.renderer
    }
}

fn create_context(element: &HtmlCanvasElement) -> Res<Gl> {
    match element.get_context("webgl2") {
        Ok(Some(context)) => context
            .dyn_into::<Gl>()
            .map_err(|_| "Context is not a WebGl2RenderingContext.".to_string()),
        _ => err("Failed to get the rendering context for WebGL."),
    }
}

fn window() -> Res<Window> {
    match web_sys::window() {
        Some(w) => Ok(w),
        None => err("No Window."),
    }
}

pub fn get_document() -> Res<Document> {
    match window()?.document() {
        Some(d) => Ok(d),
        None => err("No Document."),
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Res<()> {
    match window()?.request_animation_frame(f.as_ref().unchecked_ref()) {
        Ok(_) => Ok(()),
        Err(_) => err("Failed to get animation frame."),
    }
}

/// High resolution time since page load, in milliseconds.
pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
