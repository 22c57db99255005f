pub mod commands;
pub mod menu;
pub mod opts;
