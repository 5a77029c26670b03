use dioxus::prelude::*;
use log::{ debug, info };

pub const WELCOME_TITLE: &str = "Welcome";
pub const WELCOME_SUBTITLE: &str = "Sign in to continue, or recover access to your account.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeChoice {
    GoLogin,
    GoRecovery,
}

impl WelcomeChoice {
    /// The controls in the order they appear on screen.
    pub const ALL: [WelcomeChoice; 2] = [WelcomeChoice::GoLogin, WelcomeChoice::GoRecovery];

    pub fn label(self) -> &'static str {
        match self {
            WelcomeChoice::GoLogin => "Sign in",
            WelcomeChoice::GoRecovery => "Recover account",
        }
    }

    fn class(self) -> &'static str {
        match self {
            WelcomeChoice::GoLogin =>
                "w-64 py-2 px-4 bg-blue-500 text-white rounded hover:bg-blue-600 transition duration-300 ease-in-out",
            WelcomeChoice::GoRecovery =>
                "w-64 py-2 px-4 border border-blue-500 text-blue-500 rounded hover:bg-blue-50 transition duration-300 ease-in-out",
        }
    }

    pub fn dispatch(self, on_go_login: &EventHandler<()>, on_go_recovery: &EventHandler<()>) {
        info!("Welcome screen: {:?}", self);
        match self {
            WelcomeChoice::GoLogin => on_go_login.call(()),
            WelcomeChoice::GoRecovery => on_go_recovery.call(()),
        }
    }
}

#[component]
pub fn WelcomeScreen(on_go_login: EventHandler<()>, on_go_recovery: EventHandler<()>) -> Element {
    debug!("Rendering welcome screen");

    let buttons = WelcomeChoice::ALL.into_iter().map(|choice| {
        rsx!(
            button {
                key: "{choice:?}",
                r#type: "button",
                class: choice.class(),
                onclick: move |_| choice.dispatch(&on_go_login, &on_go_recovery),
                {choice.label()}
            }
        )
    });

    rsx! {
        div {
            class: "container mx-auto p-4 mt-16 flex flex-col items-center gap-4",
            h1 {
                class: "text-2xl font-bold",
                {WELCOME_TITLE}
            }
            p {
                class: "text-gray-600 mb-4",
                {WELCOME_SUBTITLE}
            }
            {buttons}
        }
    }
}
