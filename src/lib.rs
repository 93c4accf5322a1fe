mod api;
mod app;
mod components;
mod session;
mod types;

use wasm_bindgen::prelude::*;

use app::App;

#[wasm_bindgen(start)]
pub fn run_app() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("document not available")?;
    let root = document
        .get_element_by_id("root")
        .ok_or("missing #root element")?;
    yew::Renderer::<App>::with_root(root).render();
    Ok(())
}
