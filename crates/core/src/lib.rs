//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game and nothing else.
//! It has no clock, no rendering and no input handling: an embedder drives a
//! [`Session`] with discrete commands and reads back a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven tetrominoes, their four rotation states, kick offsets
//! - [`board`]: 10x20 grid with collision tests and line clearing
//! - [`piece`]: the active piece; move, rotate (with kicks) and hard-drop queries
//! - [`rng`]: uniform seeded piece selection
//! - [`session`]: one game, from first spawn to game over and reset
//! - [`snapshot`]: read-only state for renderers
//! - [`config`]: gravity period and seed
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every spawn is an independent, uniform pick
//! - **Rotation**: in place; only the I piece tries kick offsets
//! - **Locking**: immediate, as soon as gravity cannot move the piece
//! - **Scoring**: one point per cleared line
//! - **Game over**: a lock leaves material in row 0, or a new piece cannot spawn
//!
//! # Example
//!
//! ```
//! use blocktris_core::Session;
//! use blocktris_types::Command;
//!
//! let mut session = Session::with_seed(12345);
//!
//! session.apply(Command::MoveRight);
//! session.apply(Command::RotateCw);
//! session.apply(Command::HardDrop);
//!
//! let snapshot = session.snapshot();
//! assert_eq!(snapshot.filled_count(), 4);
//! assert!(!snapshot.game_over);
//! ```
//!
//! # Threading
//!
//! A session is a plain value with no interior locking. If input and the
//! gravity timer live on different threads, funnel both into one owner
//! (a channel) or wrap the session in a mutex.

pub mod board;
pub mod config;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::SessionConfig;
pub use piece::Tetromino;
pub use pieces::{get_shape, kick_offsets};
pub use rng::PieceRng;
pub use session::Session;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
