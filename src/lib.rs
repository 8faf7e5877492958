//! Sprc - sprite sheet compiler for the Commodore 64's VIC-II
//!
//! This library provides functionality to:
//! - Parse .spm sprite sheets (JSON pixel matrices plus render attributes)
//! - Pack frames into the VIC-II's hires or multicolor byte layout
//! - Fold every frame's visible pixels into one sheet-level bounding box
//! - Emit linkable code: a C frame table with companion header, or one
//!   relocatable assembly section per frame (GNU as or ca65 dialect)

pub mod bounds;
pub mod cli;
pub mod compile;
pub mod emit;
pub mod flags;
pub mod models;
pub mod output;
pub mod packer;
pub mod parser;
pub mod validate;
