// The #[wasm_bindgen(start)] call is needed but Clippy doesn't see that.
#![allow(clippy::unused_unit)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Mutex;

use scene::{Joint, Settings};
use wasm_bindgen::prelude::*;

use crate::bridge::{expose_closure_string_in, expose_closure_string_out, request_animation_frame};
use crate::dom::element::Element;
use crate::viewport::Viewport;

pub type VpRef = Rc<Mutex<Viewport>>;

fn lock_and<T: FnOnce(&mut Viewport)>(vp: &VpRef, action: T) {
    if let Ok(mut lock) = vp.try_lock() {
        action(&mut lock);
    } else {
        log::warn!("Failed to lock for handler.");
    }
}

fn logged_error<T>(error_message: &str) -> Result<T, JsValue> {
    log::error!("{error_message}");
    Err(wasm_bindgen::JsValue::from_str(error_message))
}

fn parse_json<'a, T: serde::Deserialize<'a>>(json: &'a str) -> Option<T> {
    match serde_json::from_str::<T>(json) {
        Ok(val) => Some(val),
        Err(e) => {
            log::error!("Failed to parse JSON ({e}): {json}");
            None
        }
    }
}

const JOINT_CONTROLS: [(Joint, &str, &str); 3] = [
    (Joint::Joint1, "slider_joint_1", "b_toggle_joint1_animation"),
    (Joint::Joint2, "slider_joint_2", "b_toggle_joint2_animation"),
    (Joint::Joint3, "slider_joint_3", "b_toggle_joint3_animation"),
];

/// Attach a handler to a slider that reports its value in degrees.
fn wire_slider<F: Fn(&mut Viewport, f32) + 'static>(vp: &VpRef, id: &str, handler: F) {
    let Some(mut slider) = Element::by_id(id) else {
        log::warn!("Missing slider #{id}.");
        return;
    };

    let vp_ref = vp.clone();
    let el = slider.clone();
    slider.set_oninput(Box::new(move |_: web_sys::Event| {
        let value = el.value_float() as f32;
        lock_and(&vp_ref, |vp| handler(vp, value));
    }));
}

fn wire_button<F: Fn(&mut Viewport) + 'static>(vp: &VpRef, id: &str, handler: F) {
    let Some(mut button) = Element::by_id(id) else {
        log::warn!("Missing button #{id}.");
        return;
    };

    let vp_ref = vp.clone();
    button.set_onclick(Box::new(move |_: web_sys::Event| lock_and(&vp_ref, |vp| handler(vp))));
}

fn wire_controls(vp: &VpRef) {
    wire_slider(vp, "slider_camera_angle", |vp, v| vp.set_slider_angle(v));

    for (joint, slider, button) in JOINT_CONTROLS {
        wire_slider(vp, slider, move |vp, v| vp.set_joint_angle(joint, v));
        wire_button(vp, button, move |vp| vp.toggle_animation(joint));
    }
}

/// Move the sliders to the values the stage starts with.
fn sync_controls(vp: &Viewport) {
    if let Some(slider) = Element::by_id("slider_camera_angle") {
        slider.set_value_float(vp.stage.rotation.slider);
    }
    for (joint, slider, _) in JOINT_CONTROLS {
        if let Some(slider) = Element::by_id(slider) {
            slider.set_value_float(vp.stage.angles.get(joint));
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return logged_error("Failed to initialise logging.");
    }

    let vp = match Viewport::new(Settings::default()) {
        Ok(s) => Rc::new(Mutex::new(s)),
        Err(e) => return logged_error(&format!("Failed to create viewport: {e}")),
    };

    wire_controls(&vp);
    lock_and(&vp, |vp| sync_controls(vp));

    // This closure acquires the lock on the Viewport, then exports the map
    // as base64 so the page can stash it.
    let vp_ref = vp.clone();
    let export_closure = Closure::wrap(Box::new(move || {
        if let Ok(lock) = vp_ref.try_lock() {
            lock.export_world()
        } else {
            log::warn!("Failed to lock for export.");
            String::new()
        }
    }) as Box<dyn FnMut() -> String>);
    expose_closure_string_out("export_world", &export_closure);
    export_closure.forget();

    let vp_ref = vp.clone();
    let load_world_closure = Closure::wrap(Box::new(move |world_b64: String| {
        lock_and(&vp_ref, |vp| vp.load_world(&world_b64));
    }) as Box<dyn FnMut(String)>);
    expose_closure_string_in("load_world", &load_world_closure);
    load_world_closure.forget();

    let vp_ref = vp.clone();
    let configure_closure = Closure::wrap(Box::new(move |json: String| {
        if let Some(settings) = parse_json::<Settings>(&json) {
            lock_and(&vp_ref, |vp| {
                vp.configure(settings);
                sync_controls(vp);
            });
        }
    }) as Box<dyn FnMut(String)>);
    expose_closure_string_in("configure", &configure_closure);
    configure_closure.forget();

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Ok(mut lock) = vp.lock() {
            lock.animation_frame();
        } else {
            log::warn!("Failed to lock viewport for animation frame.");
        }

        if let Some(closure) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(closure) {
                log::error!("{e}");
            }
        }
    }) as Box<dyn FnMut()>));

    let scheduled = match g.borrow().as_ref() {
        Some(closure) => request_animation_frame(closure),
        None => Ok(()),
    };
    scheduled.or_else(|e| logged_error(&e))
}
