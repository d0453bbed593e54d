//! Browser bindings. The page owns the config (as JSON) and calls back in on
//! every edit; each export is a thin wrapper over a plain function below.

use mount_core::{
    AdvisoryResponse, DisplayUnit, MountConfig, PAPER_SIZES, compute, parse_advisory_response,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod utils;

/// Reply to `apply_suggestion`: the parsed response plus the config to use next.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SuggestionOutcome {
    response: AdvisoryResponse,
    config: MountConfig,
}

fn parse_config(config: &str) -> Result<MountConfig, String> {
    MountConfig::from_json_str(config).map_err(|e| e.to_string())
}

fn to_json<T: Serialize>(v: &T) -> Result<String, String> {
    serde_json::to_string(v).map_err(|e| e.to_string())
}

fn default_config_json() -> Result<String, String> {
    to_json(&MountConfig::default())
}

fn compute_json(config: &str) -> Result<String, String> {
    let cfg = parse_config(config)?;
    to_json(&compute(&cfg))
}

fn toggle_json(config: &str) -> Result<String, String> {
    let cfg = parse_config(config)?;
    to_json(&cfg.toggle_orientation())
}

// Advisory failures come back as the generic notice; the page keeps its config.
fn apply_suggestion_json(config: &str, response: &str) -> Result<String, String> {
    let cfg = parse_config(config)?;
    let resp = parse_advisory_response(response).map_err(|e| e.user_notice().to_string())?;
    let next = resp.overlay(&cfg);
    to_json(&SuggestionOutcome {
        response: resp,
        config: next,
    })
}

// Page inputs are typed in the display unit; the config stores millimetres.
fn input_to_mm(value: f64, unit: &str) -> Result<f64, String> {
    let unit: DisplayUnit = unit.parse()?;
    Ok(unit.from_display(value))
}

fn preview_svg_string(config: &str, unit: &str, px_per_mm: f64) -> Result<String, String> {
    let cfg = parse_config(config)?;
    let unit: DisplayUnit = unit.parse()?;
    let geom = compute(&cfg);
    let (svg, _, _) = mount_preview::build_preview_svg(&cfg, &geom, unit, px_per_mm);
    Ok(svg)
}

fn into_js(r: Result<String, String>) -> Result<String, JsValue> {
    r.map_err(|e| {
        utils::log(&format!("mount: {e}"));
        JsValue::from_str(&e)
    })
}

#[wasm_bindgen]
pub fn default_config() -> Result<String, JsValue> {
    into_js(default_config_json())
}

#[wasm_bindgen]
pub fn compute_geometry(config: &str) -> Result<String, JsValue> {
    into_js(compute_json(config))
}

#[wasm_bindgen]
pub fn toggle_orientation(config: &str) -> Result<String, JsValue> {
    into_js(toggle_json(config))
}

#[wasm_bindgen]
pub fn apply_suggestion(config: &str, response: &str) -> Result<String, JsValue> {
    into_js(apply_suggestion_json(config, response))
}

#[wasm_bindgen]
pub fn preview_svg(config: &str, unit: &str, px_per_mm: f64) -> Result<String, JsValue> {
    into_js(preview_svg_string(config, unit, px_per_mm))
}

#[wasm_bindgen]
pub fn to_millimetres(value: f64, unit: &str) -> Result<f64, JsValue> {
    input_to_mm(value, unit).map_err(|e| {
        utils::log(&format!("mount: {e}"));
        JsValue::from_str(&e)
    })
}

#[wasm_bindgen]
pub fn paper_sizes() -> Result<String, JsValue> {
    into_js(to_json(&PAPER_SIZES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn compute_from_partial_json() {
        let out = compute_json(r#"{"boardPreset": "A4", "mountOffset": 0}"#).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["boardSize"]["width"], 210.0);
        assert_eq!(v["boardSize"]["height"], 297.0);
    }

    #[test]
    fn toggle_round_trips_through_json() {
        let cfg = default_config_json().unwrap();
        let twice = toggle_json(&toggle_json(&cfg).unwrap()).unwrap();
        assert_eq!(
            parse_config(&twice).unwrap(),
            MountConfig::default()
        );
    }

    #[test]
    fn suggestion_outcome_carries_new_config() {
        let resp = r#"{"suggestion": "ok", "reasoning": "r", "suggestedConfig": {"photoBorder": 2,
            "mountOffset": 4, "manualBorders": {"top": 30, "bottom": 40, "left": 30, "right": 30}}}"#;
        let out = apply_suggestion_json("{}", resp).unwrap();
        let v: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["config"]["mode"], "CustomBorders");
        assert_eq!(v["config"]["manualBorders"]["bottom"], 40.0);
        assert_eq!(v["response"]["suggestion"], "ok");
    }

    #[test]
    fn malformed_suggestion_gives_notice() {
        let err = apply_suggestion_json("{}", "busy").unwrap_err();
        assert!(err.contains("try again"));
    }

    #[test]
    fn inch_inputs_become_millimetres() {
        assert_eq!(input_to_mm(8.0, "in").unwrap(), 203.2);
        assert_eq!(input_to_mm(6.35, "mm").unwrap(), 6.35);
        assert!(input_to_mm(1.0, "cubit").is_err());
    }

    #[test]
    fn preview_and_bad_unit() {
        let svg = preview_svg_string("{}", "in", 1.0).unwrap();
        assert!(svg.contains("<svg"));
        assert!(preview_svg_string("{}", "furlong", 1.0).is_err());
        assert!(compute_json("not json").is_err());
    }
}
