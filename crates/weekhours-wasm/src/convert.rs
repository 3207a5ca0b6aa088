use chrono::Weekday;
use wasm_bindgen::JsValue;
use weekhours::bits::WEEKDAYS;

/// Maps a JavaScript day number (`Date.prototype.getDay`, 0 = Sunday) to a [Weekday].
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS.get(index as usize).copied()
}

pub fn weekday_from_js(index: u8) -> Result<Weekday, JsValue> {
    weekday_from_index(index)
        .ok_or_else(|| JsValue::from_str(&format!("weekday {index} out of range 0..=6")))
}

pub fn error_to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}
