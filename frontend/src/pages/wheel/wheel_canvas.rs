use std::f64::consts::PI;

use shared::rotation::wedge_size;
use shared::WheelOption;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 420;
const LABEL_MAX_CHARS: usize = 18;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub options: Vec<WheelOption>,
    pub rotation: f64,
    pub is_spinning: bool,
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn short_label(label: &str) -> String {
    if label.chars().count() > LABEL_MAX_CHARS {
        let cut: String = label.chars().take(LABEL_MAX_CHARS - 1).collect();
        format!("{}…", cut)
    } else {
        label.to_string()
    }
}

/// Wedge `i` spans clockwise-from-top angles `[360 - (i+1)w, 360 - iw]` in
/// wheel space, so rotating the wheel clockwise by `r` puts wedge
/// `floor(r / w)` under the top pointer.
fn wedge_arc(index: usize, count: usize) -> (f64, f64) {
    let w = wedge_size(count.max(1));
    let start = 360.0 - (index as f64 + 1.0) * w - 90.0;
    let end = 360.0 - index as f64 * w - 90.0;
    (start.to_radians(), end.to_radians())
}

fn draw(ctx: &CanvasRenderingContext2d, options: &[WheelOption], rotation: f64, is_spinning: bool) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 20.0;
    let dark = is_dark_mode();

    ctx.clear_rect(0.0, 0.0, size, size);

    let glow = if is_spinning { 0.25 } else { 0.15 };
    ctx.begin_path();
    if dark {
        ctx.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow));
    } else {
        ctx.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    }
    let _ = ctx.arc(center, center, radius + 12.0, 0.0, 2.0 * PI);
    ctx.fill();

    ctx.save();
    let _ = ctx.translate(center, center);
    let _ = ctx.rotate(rotation.to_radians());

    if options.is_empty() {
        ctx.begin_path();
        ctx.set_fill_style_str(if dark { "#1a1c2e" } else { "#f0f2ff" });
        let _ = ctx.arc(0.0, 0.0, radius, 0.0, 2.0 * PI);
        ctx.fill();
    }

    for (i, option) in options.iter().enumerate() {
        let (start, end) = wedge_arc(i, options.len());
        ctx.begin_path();
        ctx.set_fill_style_str(&option.color.to_hex());
        ctx.move_to(0.0, 0.0);
        let _ = ctx.arc(0.0, 0.0, radius, start, end);
        ctx.close_path();
        ctx.fill();

        ctx.set_stroke_style_str("rgba(255, 255, 255, 0.6)");
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.save();
        let _ = ctx.rotate((start + end) / 2.0);
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font("bold 15px sans-serif");
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(&short_label(&option.label), radius - 14.0, 0.0);
        ctx.restore();
    }

    ctx.restore();

    // hub
    ctx.begin_path();
    ctx.set_fill_style_str(if dark { "#111827" } else { "#ffffff" });
    let _ = ctx.arc(center, center, 18.0, 0.0, 2.0 * PI);
    ctx.fill();

    // pointer
    ctx.begin_path();
    ctx.set_fill_style_str("#facc15");
    ctx.move_to(center - 14.0, 4.0);
    ctx.line_to(center + 14.0, 4.0);
    ctx.line_to(center, 34.0);
    ctx.close_path();
    ctx.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.options.clone(), props.rotation, props.is_spinning),
            move |(options, rotation, is_spinning)| {
                if let Some(ctx) = canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_2d) {
                    draw(&ctx, options, *rotation, *is_spinning);
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="max-w-full h-auto"
        />
    }
}
