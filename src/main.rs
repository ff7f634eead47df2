mod components;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;

use std::rc::Rc;

use components::{App, AppProps};
use services::{init_identity, IdentityConfig, JsIdentityService};
use stores::SessionStore;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🔐 AuthApp starting...");

    init_identity(&IdentityConfig::from_env());

    // The one SessionStore of the process; everything else receives it by
    // props/context.
    let store = SessionStore::new(Rc::new(JsIdentityService));

    yew::Renderer::<App>::with_props(AppProps { store }).render();
}
