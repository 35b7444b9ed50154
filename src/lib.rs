//! Lottery number draws.
//!
//! A [`NumberSet`] holds six numbers drawn from a [`RandomSource`] and kept in
//! ascending order by the canonical [`sort::sort`]. Query helpers cover the
//! smallest and largest number, membership and printing.
//!
//! Draws run natively or in the browser through the wasm-bindgen exports below.

pub mod draw;
pub mod error;
pub mod rng;
pub mod sort;
pub mod types;

pub use error::{DrawError, Result};
pub use rng::{LottoRng, RandomSource, DEFAULT_HIGH, DEFAULT_LOW};
pub use types::{DrawSummary, NumberSet, SET_SIZE};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use crate::{DrawError, NumberSet};

    fn to_js(err: DrawError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }

    fn number_set(seed: Option<u64>) -> Result<NumberSet, JsValue> {
        match seed {
            Some(seed) => NumberSet::seeded(seed),
            None => NumberSet::standard(),
        }
        .map_err(to_js)
    }

    /// Draw six numbers in `1..=49`, repeats allowed, sorted ascending.
    #[wasm_bindgen(js_name = "drawNumbers")]
    pub fn wasm_draw_numbers(seed: Option<u64>) -> Result<js_sys::Uint32Array, JsValue> {
        let mut set = number_set(seed)?;
        set.draw().map_err(to_js)?;

        let arr = js_sys::Uint32Array::new_with_length(crate::SET_SIZE as u32);
        arr.copy_from(&set.values());
        Ok(arr)
    }

    /// Draw and return `{ numbers, min, max, hasDuplicates }`.
    #[wasm_bindgen(js_name = "drawSummary")]
    pub fn wasm_draw_summary(seed: Option<u64>, unique: bool) -> Result<JsValue, JsValue> {
        let mut set = number_set(seed)?;
        if unique {
            set.draw_unique()
        } else {
            set.draw()
        }
        .map_err(to_js)?;

        serde_wasm_bindgen::to_value(&set.summary()).map_err(JsValue::from)
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM lotto ready".to_string()
    }
}
