use dioxus::prelude::*;
use log::warn;
use crate::components::WelcomeScreen;
use crate::routes::Route;

fn go_to(nav: Navigator, route: Route) {
    if let Some(failure) = nav.push(route.clone()) {
        warn!("Navigation to {} failed: {:?}", route, failure);
    }
}

#[component]
pub fn Welcome() -> Element {
    let nav = navigator();

    rsx! {
        WelcomeScreen {
            on_go_login: move |_| go_to(nav, Route::Login),
            on_go_recovery: move |_| go_to(nav, Route::Recovery),
        }
    }
}
