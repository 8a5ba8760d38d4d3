//! SeaORM entity models for the giveboard database schema.

pub mod giveaway;

pub mod prelude;
