//! Terminal front end: app state, key handling, rendering.

pub mod app;
pub mod controller;
pub mod ui;
