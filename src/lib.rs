mod components;
mod configs;
mod error;
mod routes;
mod utils;
mod views;
#[cfg(test)]
mod tests;

pub use crate::components::*;
pub use crate::configs::ThemeConfig;
pub use crate::error::ThemeError;
pub use crate::routes::*;
pub use crate::utils::*;
