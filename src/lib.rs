//! A turn-based archery game on a text grid: dodge the spiders closing in
//! from the walls and shoot them before they reach you.

pub mod board;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod flight;
pub mod game;
pub mod hunt;
pub mod input;
pub mod menu;
pub mod session;
