//! AscendiMed frontend library: color utility, theme, mock data, navigation, UI.

pub mod app;
pub mod color;
pub mod config;
pub mod models;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod widgets;
