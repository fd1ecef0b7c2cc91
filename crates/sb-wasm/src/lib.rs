//! WebAssembly bindings for Scriptbridge

use wasm_bindgen::prelude::*;
use sb_compiler::{convert_filter_list, ConvertStats};
use sb_core::Conversion;

#[wasm_bindgen]
pub fn is_ubo_scriptlet_rule(rule: &str) -> bool {
    sb_core::is_ubo_scriptlet_rule(rule)
}

#[wasm_bindgen]
pub fn is_abp_snippet_rule(rule: &str) -> bool {
    sb_core::is_abp_snippet_rule(rule)
}

#[wasm_bindgen]
pub fn detect_dialect(rule: &str) -> String {
    sb_core::detect(rule).as_str().to_string()
}

/// Returns a string for native and uBO rules, an array of strings for ABP rules.
#[wasm_bindgen]
pub fn convert_rule(rule: &str) -> JsValue {
    match sb_core::convert_rule(rule) {
        Conversion::Unchanged(rule) => JsValue::from_str(rule),
        Conversion::Scriptlet(line) => JsValue::from_str(&line),
        Conversion::Snippets(lines) => lines_to_array(&lines).into(),
    }
}

#[wasm_bindgen]
pub fn convert_filter_list_text(text: &str) -> JsValue {
    let converted = convert_filter_list(text);

    let js_result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&js_result, &"lines".into(), &lines_to_array(&converted.lines));
    let _ = js_sys::Reflect::set(&js_result, &"stats".into(), &stats_to_object(&converted.stats));

    js_result.into()
}

/// Convert several lists at once; each entry of `list_texts` must be a string.
#[wasm_bindgen]
pub fn convert_filter_lists(list_texts: JsValue) -> Result<JsValue, JsValue> {
    let list_array = js_sys::Array::from(&list_texts);
    let list_count = list_array.length() as usize;

    if list_count == 0 {
        return Err(JsValue::from_str("No list texts provided"));
    }

    let lines = js_sys::Array::new();
    let list_stats = js_sys::Array::new_with_length(list_count as u32);
    let mut total = ConvertStats::default();

    for (idx, value) in list_array.iter().enumerate() {
        let text = value
            .as_string()
            .ok_or_else(|| JsValue::from_str("List text must be a string"))?;

        let converted = convert_filter_list(&text);
        for line in &converted.lines {
            lines.push(&JsValue::from_str(line));
        }

        total.merge(&converted.stats);
        list_stats.set(idx as u32, stats_to_object(&converted.stats).into());
    }

    let js_result = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&js_result, &"lines".into(), &lines);
    let _ = js_sys::Reflect::set(&js_result, &"stats".into(), &stats_to_object(&total));
    let _ = js_sys::Reflect::set(&js_result, &"listStats".into(), &list_stats);

    Ok(js_result.into())
}

fn lines_to_array(lines: &[String]) -> js_sys::Array {
    let array = js_sys::Array::new_with_length(lines.len() as u32);
    for (i, line) in lines.iter().enumerate() {
        array.set(i as u32, JsValue::from_str(line));
    }
    array
}

fn stats_to_object(stats: &ConvertStats) -> js_sys::Object {
    let stat = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&stat, &"lines".into(), &JsValue::from(stats.lines as u32));
    let _ = js_sys::Reflect::set(&stat, &"blank".into(), &JsValue::from(stats.blank as u32));
    let _ = js_sys::Reflect::set(&stat, &"comments".into(), &JsValue::from(stats.comments as u32));
    let _ = js_sys::Reflect::set(&stat, &"native".into(), &JsValue::from(stats.native as u32));
    let _ = js_sys::Reflect::set(&stat, &"uboRules".into(), &JsValue::from(stats.ubo_rules as u32));
    let _ = js_sys::Reflect::set(&stat, &"abpRules".into(), &JsValue::from(stats.abp_rules as u32));
    let _ = js_sys::Reflect::set(&stat, &"abpStatements".into(), &JsValue::from(stats.abp_statements as u32));
    let _ = js_sys::Reflect::set(&stat, &"outputLines".into(), &JsValue::from(stats.output_lines as u32));
    stat
}
