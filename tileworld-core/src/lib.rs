#![no_std]
extern crate alloc;

pub mod action;
pub mod assets;
pub mod error;
pub mod font;
pub mod image;
pub mod image_editor;
pub mod input;
pub mod project;
pub mod rule;
pub mod rule_editor;
pub mod stage;
pub mod surface;
pub mod tiles;
