//! Planning calculator for biological pest control orders across
//! greenhouse compartments.

pub mod area;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod manager;
pub mod model;
pub mod report;
pub mod store;
