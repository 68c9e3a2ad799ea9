#![warn(clippy::all, rust_2018_idioms)]
//! egui front end for the posts table viewer.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::PostviewApp;
