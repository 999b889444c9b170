//! Live station board server.
//!
//! Answers: "what arrives, what departs, and what is on each track at this
//! station right now?" Boards are computed from per-day station schedules
//! against a periodically advancing "now" and served as JSON.

pub mod board;
pub mod cache;
pub mod config;
pub mod domain;
pub mod feed;
pub mod schedules;
pub mod web;
