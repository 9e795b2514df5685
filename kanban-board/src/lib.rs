//! # Kanban Boards
//!
//! Board and membership domain models consumed by the kanban authorization
//! engine.
//!
//! ## Overview
//!
//! The kanban-board crate handles:
//! - **Boards**: Owner and visibility of each board
//! - **Memberships**: User-board relationships with a role
//!
//! ## Architecture
//!
//! ```text
//! User
//!   ├─ owns ─────────→ Board (owner_id, visibility)
//!   └─ BoardMember ──→ Board (role: viewer | member | admin)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use kanban_board::{Board, BoardMember, BoardVisibility};
//! use uuid::Uuid;
//!
//! let owner_id = Uuid::now_v7();
//! let board = Board::new("Roadmap", owner_id).with_visibility(BoardVisibility::Public);
//!
//! let user_id = Uuid::now_v7();
//! let membership = BoardMember::new(board.id, user_id, "member").with_inviter(owner_id);
//! assert_eq!(membership.invited_by, Some(owner_id));
//! ```
//!
//! Persistence lives outside this crate; `kanban-authz` defines the store
//! traits that load these models.

pub mod board;
pub mod membership;

// Re-export main types for convenience
pub use board::{Board, BoardVisibility};
pub use membership::BoardMember;
