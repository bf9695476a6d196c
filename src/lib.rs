//! # Quoridor
//!
//! Legal pawn movement on a 9×9 Quoridor board, derived as a directed
//! movement graph from the pawn positions and the placed walls, plus the game
//! shell built on top of it.
//!
//! ## Modules
//!
//! - [`game`] — Board geometry, movement graph, players, game state, rendering
//! - [`ai`] — Agent trait, shortest-path and random automated players
//! - [`session`] — Matches between two agents
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
