use dioxus::prelude::*;
use crate::components::{ use_theme_state, ThemeToggle };
use crate::routes::Route;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    let theme = use_theme_state();
    let is_dark = theme.theme.is_dark();

    rsx! {
        div {
            document::Link { rel: "stylesheet", href: NAVBAR_CSS }

            nav {
                class: if is_dark {
                    "bg-dark-primary shadow-lg transition-colors duration-200"
                } else {
                    "bg-white shadow-lg transition-colors duration-200"
                },
                div {
                    id: "navbar",
                    class: "container mx-auto px-4 py-3 flex justify-between items-center",
                    Link {
                        class: if is_dark {
                            "text-white hover:text-primary transition-colors"
                        } else {
                            "text-gray-800 hover:text-primary transition-colors"
                        },
                        to: Route::Welcome,
                        "Home"
                    }
                    ThemeToggle { state: theme }
                }
            }
            Outlet::<Route> {}
        }
    }
}
