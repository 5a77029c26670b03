use dioxus::prelude::*;
use entry_ui::{ Route, ThemeConfig, ThemeProvider };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to initialize logger: {}", e).into());
        }
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ThemeConfig::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ThemeProvider {
            config,
            Router::<Route> {}
        }
    }
}
