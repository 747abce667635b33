//! Stateless helpers shared by the model and engine layers.

pub mod geometry;
