//! In-memory store implementations
//!
//! Suitable for single-process applications and testing. Production
//! deployments implement [`IdentityStore`] and [`BoardStore`] over their own
//! persistence.

use async_trait::async_trait;
use kanban_board::{Board, BoardMember};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::store::{BoardStore, IdentityStore};

/// In-memory identity store.
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    /// System roles per user
    user_roles: Arc<RwLock<HashMap<Uuid, Vec<String>>>>,
    /// Claims per system role
    role_claims: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// Direct claims per user
    user_claims: Arc<RwLock<HashMap<Uuid, Vec<String>>>>,
}

impl MemoryIdentityStore {
    /// Create an empty identity store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give a user a system role.
    pub async fn assign_system_role(&self, user_id: Uuid, role: impl Into<String>) {
        let role = role.into();
        let mut user_roles = self.user_roles.write().await;
        let roles = user_roles.entry(user_id).or_default();
        if !roles.contains(&role) {
            roles.push(role);
        }
    }

    /// Take a system role away from a user.
    pub async fn revoke_system_role(&self, user_id: Uuid, role: &str) {
        if let Some(roles) = self.user_roles.write().await.get_mut(&user_id) {
            roles.retain(|r| r != role);
        }
    }

    /// Replace the claims a system role grants.
    pub async fn set_role_claims<I, S>(&self, role: impl Into<String>, claims: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.role_claims
            .write()
            .await
            .insert(role.into(), claims.into_iter().map(Into::into).collect());
    }

    /// Grant a claim directly to a user.
    pub async fn grant_user_claim(&self, user_id: Uuid, claim: impl Into<String>) {
        let claim = claim.into();
        let mut user_claims = self.user_claims.write().await;
        let claims = user_claims.entry(user_id).or_default();
        if !claims.contains(&claim) {
            claims.push(claim);
        }
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn system_roles(&self, user_id: Uuid) -> StoreResult<Vec<String>> {
        Ok(self
            .user_roles
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn role_claims(&self, role: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .role_claims
            .read()
            .await
            .get(role)
            .cloned()
            .unwrap_or_default())
    }

    async fn user_claims(&self, user_id: Uuid) -> StoreResult<Vec<String>> {
        Ok(self
            .user_claims
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory board and membership store.
///
/// Memberships are keyed by `(board_id, user_id)`, so inserting a second row
/// for the same pair replaces the first.
#[derive(Debug, Clone, Default)]
pub struct MemoryBoardStore {
    boards: Arc<RwLock<HashMap<Uuid, Board>>>,
    members: Arc<RwLock<HashMap<(Uuid, Uuid), BoardMember>>>,
}

impl MemoryBoardStore {
    /// Create an empty board store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a board.
    pub async fn insert_board(&self, board: Board) {
        self.boards.write().await.insert(board.id, board);
    }

    /// Delete a board together with its memberships.
    pub async fn remove_board(&self, board_id: Uuid) -> Option<Board> {
        let removed = self.boards.write().await.remove(&board_id);
        if removed.is_some() {
            self.members
                .write()
                .await
                .retain(|(member_board, _), _| *member_board != board_id);
        }
        removed
    }

    /// Insert or replace a membership row.
    pub async fn upsert_member(&self, member: BoardMember) {
        self.members.write().await.insert(member.key(), member);
    }

    /// Delete a membership row.
    pub async fn remove_member(&self, board_id: Uuid, user_id: Uuid) -> Option<BoardMember> {
        self.members.write().await.remove(&(board_id, user_id))
    }
}

#[async_trait]
impl BoardStore for MemoryBoardStore {
    async fn board(&self, board_id: Uuid) -> StoreResult<Option<Board>> {
        Ok(self.boards.read().await.get(&board_id).cloned())
    }

    async fn membership(&self, board_id: Uuid, user_id: Uuid) -> StoreResult<Option<BoardMember>> {
        Ok(self.members.read().await.get(&(board_id, user_id)).cloned())
    }

    async fn owned_board_ids(&self, user_id: Uuid) -> StoreResult<Vec<Uuid>> {
        Ok(self
            .boards
            .read()
            .await
            .values()
            .filter(|b| b.is_owned_by(user_id))
            .map(|b| b.id)
            .collect())
    }

    async fn memberships_for_user(&self, user_id: Uuid) -> StoreResult<Vec<BoardMember>> {
        Ok(self
            .members
            .read()
            .await
            .values()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }
}
