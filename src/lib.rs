pub mod button;
pub mod clock;
pub mod compute;
pub mod config;
pub mod controller;
pub mod entities;
pub mod geometry;
pub mod input;
pub mod viewport;
