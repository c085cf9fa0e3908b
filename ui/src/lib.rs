#[cfg(feature = "web")]
use leptos::*;
#[cfg(feature = "web")]
use mount::mount_to_body;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(|| view! { <App/> });
}

pub mod countdown;
pub mod logging;
pub mod router;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod pages;

#[cfg(feature = "web")]
pub use crate::app::App;
