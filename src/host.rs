//! Browser host: owns the canvas, turns clicks and timers into `QuizEvent`s,
//! carries out timer `Effect`s and paints each frame.
//!
//! This is the only module that talks to `web-sys`. All quiz state lives in a
//! thread-local cell so event closures can reach it.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, FontFace, HtmlCanvasElement, MouseEvent, window,
};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::quiz::{Effect, Quiz, QuizEvent, TimerToken};
use crate::render::{DrawCmd, render};

const STYLE_ELEMENT_ID: &str = "quiz-game-style";

struct HostState {
    ctx: CanvasRenderingContext2d,
    quiz: Quiz<StdRng>,
    /// setTimeout handles of scheduled feedback delays.
    timers: HashMap<TimerToken, i32>,
}

thread_local! {
    static HOST: RefCell<Option<HostState>> = RefCell::new(None);
}

fn dom(err: JsValue) -> QuizError {
    QuizError::Dom(format!("{:?}", err))
}

pub fn is_mounted() -> bool {
    HOST.with(|cell| cell.borrow().is_some())
}

/// Creates the canvas inside the configured container and shows the title
/// screen. Mounting twice, or into a container that already holds a canvas,
/// is logged and ignored.
pub fn mount(config: QuizConfig) -> Result<(), QuizError> {
    if is_mounted() {
        warn!("quiz already mounted; ignoring second mount");
        return Ok(());
    }
    let win = window().ok_or_else(|| QuizError::Dom("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| QuizError::Dom("no document".into()))?;
    let container = doc
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| QuizError::Dom(format!("no element #{}", config.container_id)))?;
    if container.query_selector("canvas").map_err(dom)?.is_some() {
        warn!("#{} already holds a canvas; not mounting", config.container_id);
        return Ok(());
    }

    let quiz = Quiz::new(config, StdRng::from_entropy())?;
    let config = quiz.config();

    let canvas: HtmlCanvasElement = doc
        .create_element("canvas")
        .map_err(dom)?
        .dyn_into()
        .map_err(|_| QuizError::Dom("created element is not a canvas".into()))?;
    canvas.set_width(config.width);
    canvas.set_height(config.height);
    apply_layout(&doc, &container, config)?;
    container.append_child(&canvas).map_err(dom)?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom)?
        .ok_or_else(|| QuizError::Dom("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| QuizError::Dom("context is not 2d".into()))?;

    load_font(&doc, config);
    attach_click(&canvas, (config.width as f64, config.height as f64))?;
    info!(
        "mounted {}x{} canvas into #{} with {} questions",
        config.width,
        config.height,
        config.container_id,
        quiz.bank().len()
    );

    HOST.with(|cell| {
        cell.replace(Some(HostState {
            ctx,
            quiz,
            timers: HashMap::new(),
        }))
    });
    repaint();
    Ok(())
}

/// Container centering plus one shared stylesheet with the size caps.
fn apply_layout(doc: &Document, container: &Element, config: &QuizConfig) -> Result<(), QuizError> {
    container
        .set_attribute(
            "style",
            "height:100%; width:100%; display:flex; justify-content:center; align-items:center;",
        )
        .map_err(dom)?;
    if doc.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style").map_err(dom)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&style_sheet(config)));
    match doc.head() {
        Some(head) => head.append_child(&style).map_err(dom)?,
        None => container.append_child(&style).map_err(dom)?,
    };
    Ok(())
}

fn style_sheet(config: &QuizConfig) -> String {
    let sel = format!("#{} canvas", config.container_id);
    format!(
        "{sel} {{ height:100%; width:auto; max-width:{max}px; max-height:{max}px; object-fit:contain; margin:0 auto; }}\n\
         @media (max-height: {vp}px) {{ {sel} {{ max-width:{small}px; max-height:{small}px; }} }}",
        sel = sel,
        max = config.max_display,
        vp = config.compact_viewport,
        small = config.compact_display,
    )
}

/// Registers the display typeface. Until (or unless) it loads, the canvas
/// draws with the fallback family.
fn load_font(doc: &Document, config: &QuizConfig) {
    let Some(url) = &config.font_url else {
        return;
    };
    let face = match FontFace::new_with_str(&config.font_family, &format!("url({})", url)) {
        Ok(face) => face,
        Err(err) => {
            warn!("font {} rejected: {:?}", url, err);
            return;
        }
    };
    if let Err(err) = doc.fonts().add(&face) {
        warn!("could not register font {}: {:?}", url, err);
        return;
    }
    let promise: js_sys::Promise = match face.load() {
        Ok(promise) => promise,
        Err(err) => {
            warn!("font {} failed to start loading: {:?}", url, err);
            return;
        }
    };
    let family = config.font_family.clone();
    let on_load = Closure::once(move |_: JsValue| {
        info!("font {} ready", family);
        repaint();
    });
    let on_fail = Closure::once(move |err: JsValue| {
        warn!("font failed to load, keeping fallback: {:?}", err);
    });
    let _ = promise.then2(&on_load, &on_fail);
    on_load.forget();
    on_fail.forget();
}

fn attach_click(canvas: &HtmlCanvasElement, logical: (f64, f64)) -> Result<(), QuizError> {
    let target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |evt: MouseEvent| {
        let shown = (target.client_width() as f64, target.client_height() as f64);
        let (x, y) = to_logical((evt.offset_x() as f64, evt.offset_y() as f64), shown, logical);
        dispatch(QuizEvent::Pointer { x, y });
    }) as Box<dyn FnMut(_)>);
    canvas
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(dom)?;
    closure.forget();
    Ok(())
}

/// Maps a point in displayed CSS pixels to logical canvas pixels.
fn to_logical(offset: (f64, f64), shown: (f64, f64), logical: (f64, f64)) -> (f64, f64) {
    let sx = if shown.0 > 0.0 { logical.0 / shown.0 } else { 1.0 };
    let sy = if shown.1 > 0.0 { logical.1 / shown.1 } else { 1.0 };
    (offset.0 * sx, offset.1 * sy)
}

fn dispatch(event: QuizEvent) {
    let effects = HOST.with(|cell| {
        let mut guard = cell.borrow_mut();
        let state = guard.as_mut()?;
        match state.quiz.dispatch(event) {
            Ok(effects) => Some(effects),
            Err(err) => {
                error!("{}", err);
                None
            }
        }
    });
    for effect in effects.unwrap_or_default() {
        apply(effect);
    }
    repaint();
}

fn apply(effect: Effect) {
    let Some(win) = window() else {
        return;
    };
    match effect {
        Effect::Schedule { token, delay_ms } => {
            let callback = Closure::once_into_js(move || {
                HOST.with(|cell| {
                    if let Some(state) = cell.borrow_mut().as_mut() {
                        state.timers.remove(&token);
                    }
                });
                dispatch(QuizEvent::TimerElapsed(token));
            });
            let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
            match win.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                delay,
            ) {
                Ok(handle) => HOST.with(|cell| {
                    if let Some(state) = cell.borrow_mut().as_mut() {
                        state.timers.insert(token, handle);
                    }
                }),
                Err(err) => error!("setTimeout failed: {:?}", err),
            }
        }
        Effect::Cancel(token) => {
            let handle = HOST.with(|cell| {
                cell.borrow_mut()
                    .as_mut()
                    .and_then(|state| state.timers.remove(&token))
            });
            if let Some(handle) = handle {
                debug!("cancel timer {:?}", token);
                win.clear_timeout_with_handle(handle);
            }
        }
    }
}

fn repaint() {
    HOST.with(|cell| {
        if let Some(state) = cell.borrow().as_ref() {
            let frame = render(&state.quiz);
            paint(&state.ctx, &frame, state.quiz.config());
        }
    });
}

fn paint(ctx: &CanvasRenderingContext2d, frame: &[DrawCmd], config: &QuizConfig) {
    for cmd in frame {
        match cmd {
            DrawCmd::Clear { color } => {
                ctx.set_global_alpha(1.0);
                ctx.set_fill_style(&JsValue::from_str(color));
                ctx.fill_rect(0.0, 0.0, config.width as f64, config.height as f64);
            }
            DrawCmd::Rect {
                bounds,
                fill,
                alpha,
                stroke,
            } => {
                ctx.set_global_alpha(*alpha);
                ctx.set_fill_style(&JsValue::from_str(fill));
                ctx.fill_rect(bounds.x, bounds.y, bounds.w, bounds.h);
                if let Some(stroke) = stroke {
                    ctx.set_stroke_style(&JsValue::from_str(&stroke.color));
                    ctx.set_line_width(stroke.width);
                    ctx.stroke_rect(bounds.x, bounds.y, bounds.w, bounds.h);
                }
                ctx.set_global_alpha(1.0);
            }
            DrawCmd::Text {
                text,
                x,
                y,
                style,
                anchor,
            } => {
                let (align, baseline) = anchor.canvas_align();
                ctx.set_font(&config.font(style.size));
                ctx.set_text_align(align);
                ctx.set_text_baseline(baseline);
                if let Some(stroke) = &style.stroke {
                    ctx.set_stroke_style(&JsValue::from_str(&stroke.color));
                    ctx.set_line_width(stroke.width);
                    ctx.set_line_join("round");
                    ctx.stroke_text(text, *x, *y).ok();
                }
                ctx.set_fill_style(&JsValue::from_str(&style.fill));
                ctx.fill_text(text, *x, *y).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_logical_scales_down_displayed_canvas() {
        // 480x720 shown at 400px tall (compact viewport)
        let (x, y) = to_logical((100.0, 200.0), (266.666, 400.0), (480.0, 720.0));
        assert!((y - 360.0).abs() < 1e-9);
        assert!((x - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_to_logical_handles_unlaid_canvas() {
        assert_eq!(to_logical((10.0, 20.0), (0.0, 0.0), (480.0, 720.0)), (10.0, 20.0));
    }

    #[test]
    fn test_style_sheet_caps_and_media_query() {
        let css = style_sheet(&QuizConfig::default());
        assert!(css.contains("#quiz-game canvas"));
        assert!(css.contains("max-height:720px"));
        assert!(css.contains("@media (max-height: 720px)"));
        assert!(css.contains("max-width:400px"));
    }
}
