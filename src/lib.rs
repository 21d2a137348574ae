//! Plotting core that turns an equation string into points on a canvas.
//!
//! The input is first classified as an explicit, implicit, parametric or polar equation.
//! The matching sampler then walks its domain, the buffer is thinned out when it is too
//! large, and the result goes back to JavaScript as a flat `f32` array.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod expr;
pub mod geom;
pub mod parse;
pub mod sampler;

use std::fmt;

use geom::ViewportSpec;
use parse::{FormKind, classify};
use sampler::{BoundSpec, PlotError, PlotOptions, PlotOutput, SamplingDiagnostics};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when the panic hook feature is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    // A second call leaves the first logger in place.
    if log::set_logger(&DEFAULT_LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when `debug_logs` is disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Request object as `plot_request` receives it from JavaScript.
///
/// Viewport fields and options sit flat in the same object. Offsets, intervals, tolerance
/// and the coordinate cap may be omitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct PlotRequest {
    expression: String,
    #[serde(flatten)]
    viewport: ViewportSpec,
    #[serde(flatten)]
    options: PlotOptions,
}

#[derive(Debug, Serialize)]
struct PlotResponse {
    form: FormKind,
    points: Vec<f32>,
    diagnostics: SamplingDiagnostics,
}

/// Computes the canvas points of `expression` as `[x0, y0, x1, y1, …]`.
///
/// Empty interval strings mean "not supplied". Any failure yields an empty array; use
/// [`try_compute_graph_points`] to get the cause.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
#[must_use]
pub fn compute_graph_points(
    x_width: f64,
    y_width: f64,
    x_offset: f64,
    y_offset: f64,
    canvas_width: f64,
    canvas_height: f64,
    t_start: &str,
    t_end: &str,
    theta_start: &str,
    theta_end: &str,
    expression: &str,
) -> Vec<f32> {
    let viewport =
        ViewportSpec::new(x_width, y_width, canvas_width, canvas_height).with_offset(x_offset, y_offset);
    let options = call_options(t_start, t_end, theta_start, theta_end);
    points_or_empty(&viewport, expression, &options)
}

/// Same call as [`compute_graph_points`], with the failure surfaced as a `JsError`.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn try_compute_graph_points(
    x_width: f64,
    y_width: f64,
    x_offset: f64,
    y_offset: f64,
    canvas_width: f64,
    canvas_height: f64,
    t_start: &str,
    t_end: &str,
    theta_start: &str,
    theta_end: &str,
    expression: &str,
) -> Result<Vec<f32>, JsValue> {
    let viewport =
        ViewportSpec::new(x_width, y_width, canvas_width, canvas_height).with_offset(x_offset, y_offset);
    let options = call_options(t_start, t_end, theta_start, theta_end);
    sampler::plot(&viewport, expression, &options)
        .map(PlotOutput::into_flat)
        .map_err(to_js_error)
}

/// Older, reduced call without offsets or intervals.
///
/// Polar curves use the fixed `[0, 12π)` domain. Parametric curves need an interval, so
/// they come back empty here.
#[wasm_bindgen]
#[must_use]
pub fn calculate_graph_points(
    x_width: f64,
    y_width: f64,
    canvas_width: f64,
    canvas_height: f64,
    expression: &str,
) -> Vec<f32> {
    let viewport = ViewportSpec::new(x_width, y_width, canvas_width, canvas_height);
    points_or_empty(&viewport, expression, &PlotOptions::default())
}

/// Plots a request object and returns `{ form, points, diagnostics }`.
#[wasm_bindgen]
pub fn plot_request(request: JsValue) -> Result<JsValue, JsValue> {
    let request: PlotRequest = serde_wasm_bindgen::from_value(request).map_err(to_js_error)?;
    let response = run_plot_request(&request).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&response).map_err(to_js_error)
}

/// Name of the recognised form, for example `"polar"`, for UI hints.
#[wasm_bindgen]
#[must_use]
pub fn classify_expression(expression: &str) -> String {
    classify(expression).kind().name().to_owned()
}

fn call_options(t_start: &str, t_end: &str, theta_start: &str, theta_end: &str) -> PlotOptions {
    PlotOptions {
        t_interval: BoundSpec::from_optional(t_start, t_end),
        theta_interval: BoundSpec::from_optional(theta_start, theta_end),
        ..PlotOptions::default()
    }
}

fn points_or_empty(viewport: &ViewportSpec, expression: &str, options: &PlotOptions) -> Vec<f32> {
    match sampler::plot(viewport, expression, options) {
        Ok(output) => output.into_flat(),
        Err(error) => {
            log::warn!("no points for `{}`: {error}", expression.trim());
            debug_log!("compute_graph_points failed: {error}");
            Vec::new()
        }
    }
}

fn run_plot_request(request: &PlotRequest) -> Result<PlotResponse, PlotError> {
    let PlotOutput {
        points,
        diagnostics,
        ..
    } = sampler::plot(&request.viewport, &request.expression, &request.options)?;
    Ok(PlotResponse {
        form: diagnostics.form,
        points: points.to_flat(),
        diagnostics,
    })
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
