pub mod common;
mod theme_provider;
