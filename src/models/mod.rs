// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod hit;

pub use hit::{Category, Hit, HitRecord};
