pub mod action;
pub mod config;
pub mod core;
pub mod document;
pub mod generation;
pub mod language;
