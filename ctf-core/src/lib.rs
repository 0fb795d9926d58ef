pub mod datetime;
pub mod dto;
pub mod error;
pub mod scoreboard;
pub mod state;
pub mod views;
