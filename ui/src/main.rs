#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! Native and web entry points.

use postview_ui::PostviewApp;
use postview_ui::state::State;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default()).init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Posts",
        native_options,
        Box::new(|_cc| Ok(Box::new(PostviewApp::new(State::default())))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to the browser console.
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let canvas = document
            .get_element_by_id("egui_canvas")
            .expect("failed to find egui_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("egui_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(PostviewApp::new(State::default())))),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(err) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    panic!("failed to start eframe: {err:?}");
                }
            }
        }
    });
}
