use crate::{client::pages::app, config};

mod pages;

pub fn launch() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    console_error_panic_hook::set_once();
    dioxus::web::launch(app);
}
