use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Sign in"
            }
            p {
                class: "text-gray-600 mb-4",
                "Sign-in is provided by your organisation's identity service."
            }
            Link { class: "text-blue-500 hover:underline", to: Route::Welcome, "Back" }
        }
    }
}
