//! Collaborator interfaces
//!
//! The resolution service reads identity and board state through these traits
//! on every call. Implementations own connection handling, timeouts and
//! retries; the service only propagates their failures.

use async_trait::async_trait;
use kanban_board::{Board, BoardMember};
use uuid::Uuid;

use crate::error::StoreResult;

/// Source of system roles and permission claims.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Names of the system roles held by a user.
    async fn system_roles(&self, user_id: Uuid) -> StoreResult<Vec<String>>;

    /// Permission claims granted to a system role.
    async fn role_claims(&self, role: &str) -> StoreResult<Vec<String>>;

    /// Permission claims granted directly to a user.
    async fn user_claims(&self, user_id: Uuid) -> StoreResult<Vec<String>>;
}

/// Source of boards and memberships.
#[async_trait]
pub trait BoardStore: Send + Sync {
    /// Load a board by id.
    async fn board(&self, board_id: Uuid) -> StoreResult<Option<Board>>;

    /// Load the membership row for `(board_id, user_id)`.
    async fn membership(&self, board_id: Uuid, user_id: Uuid) -> StoreResult<Option<BoardMember>>;

    /// Ids of the boards a user owns.
    async fn owned_board_ids(&self, user_id: Uuid) -> StoreResult<Vec<Uuid>>;

    /// Every membership row of a user.
    async fn memberships_for_user(&self, user_id: Uuid) -> StoreResult<Vec<BoardMember>>;
}
