//! WASM bindings for the `weekhours` weekly schedule.
//!
//! JavaScript gets a [`WasmHours`] handle that decodes either text form,
//! answers slot queries and renders the schedule back:
//!
//! ```text
//! // const hours = WasmHours.fromObject({ mon: "000000000111111110000000", sat: "*" });
//! // hours.testHour(new Date().getDay(), new Date().getHours());
//! // hours.toString();  // 168-char flat string
//! // hours.toObject();  // { mon: "...", sat: "*" }
//! ```
//!
//! Weekdays are numbered like `Date.prototype.getDay`, Sunday = 0. Errors
//! are returned as strings.

mod convert;

use wasm_bindgen::prelude::*;
use weekhours::{Hours, HoursObject, WeekSchedule};

/// A weekly schedule of active hours owned by JavaScript.
#[wasm_bindgen]
pub struct WasmHours {
    hours: Hours,
}

#[wasm_bindgen]
impl WasmHours {
    /// Decodes the flat string form (`"*"` or up to 168 `'1'`/`'0'` characters).
    #[wasm_bindgen(constructor)]
    pub fn new(flat: &str) -> Result<WasmHours, JsValue> {
        let hours = Hours::parse(flat).map_err(convert::error_to_js)?;
        Ok(WasmHours { hours })
    }

    /// Decodes a `{ mon, tue, ... }` object. The result is always explicit.
    #[wasm_bindgen(js_name = fromObject)]
    pub fn from_object(obj: JsValue) -> Result<WasmHours, JsValue> {
        let object: HoursObject = serde_wasm_bindgen::from_value(obj).map_err(convert::error_to_js)?;
        Ok(WasmHours {
            hours: object.into_inner(),
        })
    }

    /// A schedule with nothing active.
    pub fn inactive() -> WasmHours {
        WasmHours {
            hours: Hours::inactive(),
        }
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn to_flat_string(&self) -> String {
        self.hours.to_string()
    }

    #[wasm_bindgen(js_name = toObject)]
    pub fn to_object(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&WeekSchedule::from_hours(&self.hours))
            .map_err(convert::error_to_js)
    }

    #[wasm_bindgen(js_name = testHour)]
    pub fn test_hour(&self, weekday: u8, hour: u8) -> Result<bool, JsValue> {
        let day = convert::weekday_from_js(weekday)?;
        Ok(self.hours.test_hour(day, hour))
    }

    #[wasm_bindgen(js_name = setHour)]
    pub fn set_hour(&mut self, weekday: u8, hour: u8, active: bool) -> Result<(), JsValue> {
        let day = convert::weekday_from_js(weekday)?;
        self.hours.set_hour(day, hour, active);
        Ok(())
    }

    /// Union of this schedule and `other`, as a new handle.
    ///
    /// Both handles are only borrowed shared, so `a.merge(a)` is allowed.
    pub fn merge(&self, other: &WasmHours) -> WasmHours {
        let mut hours = self.hours.clone();
        hours.merge(&other.hours);
        WasmHours { hours }
    }

    pub fn equals(&self, other: &WasmHours) -> bool {
        self.hours == other.hours
    }

    #[wasm_bindgen(js_name = isAllActive)]
    pub fn is_all_active(&self) -> bool {
        self.hours.is_all_active()
    }

    #[wasm_bindgen(js_name = isNoActive)]
    pub fn is_no_active(&self) -> bool {
        self.hours.is_no_active()
    }

    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> WasmHours {
        WasmHours {
            hours: self.hours.clone(),
        }
    }
}

/// Day string with hours `[from, to)` active.
#[wasm_bindgen(js_name = activeHoursRange)]
pub fn active_hours_range(from: u8, to: u8) -> String {
    weekhours::range::active_hours_range(from, to)
}
