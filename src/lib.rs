//! Planet Sim - 2D Orbital Mechanics Visualizer
//!
//! A library crate providing the gravity simulation, the smoothed camera
//! model and the Bevy plugins that render and control them.

pub mod body;
pub mod camera;
pub mod catalog;
pub mod input;
pub mod physics;
pub mod render;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
