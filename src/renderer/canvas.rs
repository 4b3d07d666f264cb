//! Canvas 2D backend for the web build

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Renderer;

const FONT: &str = "16px monospace";

pub struct CanvasRenderer {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    /// Size the canvas to the arena and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: f32, height: f32) -> Option<Self> {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let context = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        context.set_font(FONT);

        Some(Self {
            context,
            width: width as f64,
            height: height as f64,
        })
    }
}

impl Renderer for CanvasRenderer {
    fn fill_background(&mut self, color: &str) {
        self.context.set_fill_style_str(color);
        self.context.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.context.set_fill_style_str(color);
        self.context
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        let context = &self.context;
        context.set_fill_style_str(color);
        context.begin_path();
        if let Err(e) = context.arc(x as f64, y as f64, radius as f64, 0.0, TAU) {
            log::warn!("Canvas arc failed: {:?}", e);
            return;
        }
        context.fill();
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: &str) {
        self.context.set_fill_style_str(color);
        if let Err(e) = self.context.fill_text(text, x as f64, y as f64) {
            log::warn!("Canvas text failed: {:?}", e);
        }
    }
}
