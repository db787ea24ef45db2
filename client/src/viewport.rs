use scene::{Command, Joint, Settings, Stage};

use crate::bridge::{
    event::{Input, MouseAction},
    now_ms, Context,
};
use crate::dom::element::Element;

pub struct Viewport {
    pub stage: Stage,

    // WebGL rendering context wrapper
    context: Context,

    // Performance readout, if the page has one.
    perf: Option<Element>,

    // Timestamp animations are measured from
    start_ms: f64,

    // Whether the primary button went down on the canvas and hasn't come up.
    pointer_down: bool,
}

impl Viewport {
    const PERF_ID: &'static str = "numdot";

    pub fn new(settings: Settings) -> anyhow::Result<Self> {
        let context = Context::new(&settings.canvas_id)?;

        let perf = Element::by_id(Self::PERF_ID);
        if perf.is_none() {
            log::warn!("No #{} element, performance readout disabled.", Self::PERF_ID);
        }

        let mut vp = Viewport {
            stage: Stage::new(settings),
            context,
            perf,
            start_ms: now_ms(),
            pointer_down: false,
        };
        vp.update_aspect();

        Ok(vp)
    }

    /// Rebuild the stage from new settings. Pose, animation flags and the
    /// map start over.
    pub fn configure(&mut self, settings: Settings) {
        if settings.canvas_id != self.stage.settings.canvas_id {
            log::warn!("Canvas id can't be changed after start, keeping the current canvas.");
        }
        self.stage = Stage::new(settings);
        self.update_aspect();
        log::info!("Stage reconfigured.");
    }

    fn update_aspect(&mut self) {
        let (w, h) = self.context.viewport_size();
        self.stage.set_aspect(w as f32, h as f32);
    }

    pub fn set_joint_angle(&mut self, joint: Joint, degrees: f32) {
        self.stage.set_joint_angle(joint, degrees);
    }

    pub fn toggle_animation(&mut self, joint: Joint) {
        self.stage.toggle_animation(joint);
    }

    pub fn set_slider_angle(&mut self, degrees: f32) {
        self.stage.set_slider_angle(degrees);
    }

    pub fn export_world(&self) -> String {
        match self.stage.world.export_base64() {
            Ok(s) => s,
            Err(e) => {
                log::error!("Failed to export world: {e}");
                String::new()
            }
        }
    }

    pub fn load_world(&mut self, encoded: &str) {
        match self.stage.world.import_base64(encoded) {
            Ok(count) => log::info!("Loaded world with {count} blocks."),
            Err(e) => log::error!("{e}"),
        }
    }

    fn process_ui_events(&mut self) {
        let events = match self.context.events() {
            Some(e) => e,
            None => return,
        };

        for event in &events {
            match &event.input {
                Input::Mouse(at, MouseAction::Down) => {
                    self.pointer_down = true;
                    self.stage.pointer(at.x, at.y, event.shift);
                }
                Input::Mouse(at, MouseAction::Move(held)) => {
                    if *held && self.pointer_down && !event.shift {
                        self.stage.pointer(at.x, at.y, false);
                    }
                }
                Input::Mouse(_, MouseAction::Up | MouseAction::Leave) => {
                    self.pointer_down = false;
                }
                Input::Key(key) => {
                    if let Some(command) = Command::from_key(key) {
                        self.stage.apply(command);
                    }
                }
            }
        }
    }

    fn update_perf(&self, duration: f64) {
        if let Some(perf) = &self.perf {
            let fps = if duration > 0.0 {
                (1000.0 / duration).floor()
            } else {
                0.0
            };
            perf.set_text(&format!("ms: {} fps: {fps}", duration.floor()));
        }
    }

    pub fn animation_frame(&mut self) {
        let start = now_ms();

        self.process_ui_events();
        self.update_aspect();

        let seconds = ((start - self.start_ms) / 1000.0) as f32;
        self.stage.frame(self.context.renderer(), seconds);

        self.update_perf(now_ms() - start);
    }
}
