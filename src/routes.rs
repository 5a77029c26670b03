use dioxus::prelude::*;
use crate::views::{ Login, Navbar, Recovery, Welcome };

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Welcome,
    #[route("/login")]
    Login,
    #[route("/recovery")]
    Recovery,
}
