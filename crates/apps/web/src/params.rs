//! URL query string persistence for the chapter parameter.
//!
//! The parameter survives reloads and makes the current chapter shareable as
//! a link. Updates go through `history.replaceState` so stepping chapters
//! does not pollute the browser history.

use navigation::{ParamError, ParamStore};
use wasm_bindgen::JsValue;

pub const CHAPTER_PARAM: &str = "chapter";

#[derive(Debug, Default)]
pub struct UrlParamStore;

impl UrlParamStore {
    pub fn new() -> Self {
        Self
    }

    fn search_params() -> Result<web_sys::UrlSearchParams, ParamError> {
        let window = web_sys::window().ok_or(ParamError::Unavailable)?;
        let search = window.location().search().map_err(js_io("location.search"))?;
        web_sys::UrlSearchParams::new_with_str(&search).map_err(js_io("UrlSearchParams"))
    }

    fn replace_query(params: &web_sys::UrlSearchParams) -> Result<(), ParamError> {
        let window = web_sys::window().ok_or(ParamError::Unavailable)?;
        let location = window.location();
        let path = location.pathname().map_err(js_io("location.pathname"))?;
        let hash = location.hash().map_err(js_io("location.hash"))?;

        let query = String::from(params.to_string());
        let url = if query.is_empty() {
            format!("{path}{hash}")
        } else {
            format!("{path}?{query}{hash}")
        };

        window
            .history()
            .map_err(js_io("history"))?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
            .map_err(js_io("history.replaceState"))?;
        Ok(())
    }
}

fn js_io(op: &'static str) -> impl Fn(JsValue) -> ParamError {
    move |e| ParamError::Io(format!("{op} failed: {e:?}"))
}

impl ParamStore for UrlParamStore {
    fn get(&self) -> Result<Option<String>, ParamError> {
        Ok(Self::search_params()?.get(CHAPTER_PARAM))
    }

    fn set(&mut self, value: &str) -> Result<(), ParamError> {
        let params = Self::search_params()?;
        params.set(CHAPTER_PARAM, value);
        Self::replace_query(&params)
    }

    fn clear(&mut self) -> Result<(), ParamError> {
        let params = Self::search_params()?;
        params.delete(CHAPTER_PARAM);
        Self::replace_query(&params)
    }
}
