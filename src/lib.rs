//! Classic fixed-grid Snake for the terminal.
//!
//! The game core is the state update in [`game`] (movement, growth,
//! collisions) and the fixed-tick [`scheduler`] driving it. Rendering and
//! input are thin collaborators reading from and writing to that core.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
