// Renderer that replays draw commands onto a 2D canvas context

use crate::draw::DrawCommand;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    pub context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2D context from the canvas; fails if the canvas can't provide one
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, String> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| String::from("Unable to query 2d context"))?
            .ok_or_else(|| String::from("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| String::from("Context is not a CanvasRenderingContext2d"))?;
        Ok(Renderer { context })
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        for command in commands {
            self.draw_one(command)?;
        }
        self.context.set_global_alpha(1.0);
        Ok(())
    }

    fn draw_one(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.context;
        match command {
            DrawCommand::Clear { width, height } => {
                ctx.clear_rect(0.0, 0.0, *width, *height);
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
                alpha,
            } => {
                ctx.begin_path();
                ctx.arc(center[0], center[1], *radius, 0.0, std::f64::consts::PI * 2.0)?;
                ctx.set_fill_style(&JsValue::from_str(&color.to_css()));
                ctx.set_global_alpha(*alpha);
                ctx.fill();
            }
            DrawCommand::Line {
                from,
                to,
                color,
                alpha,
                width,
            } => {
                ctx.begin_path();
                ctx.move_to(from[0], from[1]);
                ctx.line_to(to[0], to[1]);
                ctx.set_stroke_style(&JsValue::from_str(&color.to_css()));
                ctx.set_global_alpha(*alpha);
                ctx.set_line_width(*width);
                ctx.stroke();
            }
        }
        Ok(())
    }
}
