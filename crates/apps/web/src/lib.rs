//! Meridian web front end.
//!
//! Owns the wasm-side app state and the wiring between the host page, the
//! externally supplied globe library, and the navigation core. The host
//! calls [`story_boot`] once with a config URL; everything after that is
//! driven by button clicks, arrow keys, and the autoplay interval.

mod dom;
mod globe;
mod params;
mod timers;

use std::cell::RefCell;

use gloo_net::http::Request;
use navigation::{NavigationController, NavigationError};
use story::{Story, StoryConfigError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::dom::DomSurfaces;
use crate::globe::JsGlobe;
use crate::params::UrlParamStore;
use crate::timers::WindowTimers;

type WebController = NavigationController<UrlParamStore, JsGlobe, DomSurfaces, WindowTimers>;

thread_local! {
    static APP: RefCell<Option<WebController>> = const { RefCell::new(None) };
}

/// Safe TLS access that returns a default on teardown instead of panicking.
fn with_app<F, R>(f: F) -> R
where
    F: FnOnce(&RefCell<Option<WebController>>) -> R,
    R: Default,
{
    APP.try_with(f).unwrap_or_default()
}

fn with_controller<F>(f: F) -> Result<(), JsValue>
where
    F: FnOnce(&mut WebController) -> Result<(), NavigationError>,
{
    let result: Option<Result<(), NavigationError>> = with_app(|app| {
        let mut slot = app.borrow_mut();
        slot.as_mut().map(f)
    });
    match result {
        Some(Err(err)) => Err(JsValue::from_str(&err.to_string())),
        _ => Ok(()),
    }
}

#[derive(Debug)]
enum BootError {
    Fetch(String),
    Config(StoryConfigError),
    Navigation(NavigationError),
}

impl std::fmt::Display for BootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BootError::Fetch(msg) => write!(f, "story config fetch failed: {msg}"),
            BootError::Config(e) => write!(f, "{e}"),
            BootError::Navigation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BootError {}

impl From<NavigationError> for BootError {
    fn from(e: NavigationError) -> Self {
        BootError::Navigation(e)
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Fetches the story config and brings up the controller.
///
/// Call once, after the host page has set up the globe library.
#[wasm_bindgen]
pub fn story_boot(config_url: String) {
    spawn_local(async move {
        if let Err(err) = boot_inner(&config_url).await {
            web_sys::console::error_1(&JsValue::from_str(&format!("story boot failed: {err}")));
        }
    });
}

async fn boot_inner(config_url: &str) -> Result<(), BootError> {
    let story = fetch_story(config_url).await?;

    for (index, chapter) in story.chapters().iter().enumerate() {
        globe::meridian_add_marker(
            index as u32,
            chapter.location.lon_deg,
            chapter.location.lat_deg,
            &chapter.title,
        );
    }

    let mut controller = NavigationController::new(
        story,
        UrlParamStore::new(),
        JsGlobe::new(),
        DomSurfaces::new(),
        WindowTimers::new(autoplay_tick),
    );
    controller.initialize()?;

    with_app(|app| {
        *app.borrow_mut() = Some(controller);
    });
    wire_controls();
    Ok(())
}

async fn fetch_story(url: &str) -> Result<Story, BootError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| BootError::Fetch(e.to_string()))?;
    let text = resp
        .text()
        .await
        .map_err(|e| BootError::Fetch(e.to_string()))?;
    Story::from_json_str(&text).map_err(BootError::Config)
}

/// Jump to the first chapter (the "start story" control).
#[wasm_bindgen]
pub fn story_start() -> Result<(), JsValue> {
    with_controller(|c| {
        if c.story().chapter_count() == 0 {
            return Ok(());
        }
        c.go_to_chapter(0)
    })
}

#[wasm_bindgen]
pub fn story_advance() -> Result<(), JsValue> {
    with_controller(|c| c.advance())
}

#[wasm_bindgen]
pub fn story_retreat() -> Result<(), JsValue> {
    with_controller(|c| c.retreat())
}

/// Jump straight to a chapter, e.g. from a marker click.
#[wasm_bindgen]
pub fn story_go_to_chapter(index: u32) -> Result<(), JsValue> {
    with_controller(|c| c.go_to_chapter(index as usize))
}

#[wasm_bindgen]
pub fn story_reset() -> Result<(), JsValue> {
    with_controller(|c| {
        c.stop_autoplay();
        c.reset_to_intro()
    })
}

#[wasm_bindgen]
pub fn story_autoplay_toggle() -> Result<(), JsValue> {
    with_controller(|c| {
        c.toggle_autoplay();
        Ok(())
    })
}

/// Current chapter index, or -1 in the intro state.
#[wasm_bindgen]
pub fn story_current_chapter() -> i32 {
    let index: Option<usize> = with_app(|app| {
        app.borrow()
            .as_ref()
            .and_then(|c| c.current_index().ok().flatten())
    });
    index.map_or(-1, |i| i as i32)
}

fn autoplay_tick() {
    if let Err(err) = with_controller(|c| c.autoplay_tick()) {
        web_sys::console::error_1(&err);
    }
}

fn wire_controls() {
    wire_click(dom::START_ID, || {
        let _ = story_start();
    });
    wire_click(dom::FORWARD_ID, || {
        let _ = story_advance();
    });
    wire_click(dom::BACK_ID, || {
        let _ = story_retreat();
    });
    wire_click(dom::AUTOPLAY_ID, || {
        let _ = story_autoplay_toggle();
    });
    wire_arrow_keys();
}

fn wire_click(id: &str, handler: fn()) {
    let Some(el) = dom::element(id) else { return };
    // Listeners live for the page lifetime; forget() is the intended leak.
    let closure = Closure::<dyn FnMut()>::new(move || handler());
    let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_arrow_keys() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| match event.key().as_str() {
            "ArrowRight" => {
                let _ = story_advance();
            }
            "ArrowLeft" => {
                let _ = story_retreat();
            }
            _ => {}
        },
    );
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
