use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// A position on the canvas in normalised device coordinates: x and y in
/// `[-1, 1]`, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    fn from_offset(x: i32, y: i32, canvas: &HtmlCanvasElement) -> Self {
        let half_w = (canvas.width().max(1) as f32) / 2.0;
        let half_h = (canvas.height().max(1) as f32) / 2.0;
        CanvasPoint {
            x: (x as f32 - half_w) / half_w,
            y: (half_h - y as f32) / half_h,
        }
    }
}

#[derive(Debug)]
pub enum MouseAction {
    Down,
    Up,
    Leave,
    /// Movement, and whether the primary button is held.
    Move(bool),
}

#[derive(Debug)]
pub enum Input {
    Mouse(CanvasPoint, MouseAction),
    Key(String),
}

#[derive(Debug)]
pub struct InputEvent {
    pub input: Input,
    pub shift: bool,
}

impl InputEvent {
    // MouseEvent.buttons bit for the primary button.
    const PRIMARY_BUTTON: u16 = 1;

    pub fn from_web_sys(
        event: &web_sys::UiEvent,
        canvas: &HtmlCanvasElement,
    ) -> Option<InputEvent> {
        match event.type_().as_str() {
            "keydown" => Self::from_keyboard(event.unchecked_ref::<web_sys::KeyboardEvent>()),
            "mousedown" | "mouseleave" | "mousemove" | "mouseup" => {
                Self::from_mouse(event.unchecked_ref::<web_sys::MouseEvent>(), canvas)
            }
            _ => None,
        }
    }

    fn from_mouse(event: &web_sys::MouseEvent, canvas: &HtmlCanvasElement) -> Option<InputEvent> {
        let action = match event.type_().as_str() {
            "mousedown" => MouseAction::Down,
            "mouseleave" => MouseAction::Leave,
            "mousemove" => MouseAction::Move(event.buttons() & Self::PRIMARY_BUTTON != 0),
            "mouseup" => MouseAction::Up,
            _ => return None,
        };

        Some(InputEvent {
            input: Input::Mouse(
                CanvasPoint::from_offset(event.offset_x(), event.offset_y(), canvas),
                action,
            ),
            shift: event.shift_key(),
        })
    }

    fn from_keyboard(event: &web_sys::KeyboardEvent) -> Option<InputEvent> {
        Some(InputEvent {
            input: Input::Key(event.key()),
            shift: event.shift_key(),
        })
    }
}
