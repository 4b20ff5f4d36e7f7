//! Navigation services

mod controller;
mod navigator;

pub use controller::NavigationController;
pub use navigator::{execute, Navigator};
