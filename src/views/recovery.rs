use dioxus::prelude::*;
use crate::routes::Route;

#[component]
pub fn Recovery() -> Element {
    rsx! {
        div {
            class: "container mx-auto p-4",
            h1 {
                class: "text-2xl font-bold mb-4",
                "Recover account"
            }
            p {
                class: "text-gray-600 mb-4",
                "Contact your administrator to reset access to your account."
            }
            Link { class: "text-blue-500 hover:underline", to: Route::Welcome, "Back" }
        }
    }
}
