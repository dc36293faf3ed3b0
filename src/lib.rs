//! Arc Collision - tile collision flags for region walls and objects

pub mod collision;
pub mod core;
pub mod entity;
pub mod geometry;
pub mod world;
