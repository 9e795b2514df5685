//! Membership domain models
//!
//! A membership links a user to a board with a role. The role is kept as the
//! raw string from storage; interpreting it (and failing closed on unknown
//! values) is the authorization layer's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Board membership linking a user to a board.
///
/// `(board_id, user_id)` is unique among memberships. The board owner does
/// not need a membership row.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use kanban_board::BoardMember;
///
/// let board_id = Uuid::now_v7();
/// let user_id = Uuid::now_v7();
/// let member = BoardMember::new(board_id, user_id, "member");
/// assert_eq!(member.role, "member");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardMember {
    /// Board ID
    pub board_id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Role within the board (e.g. "viewer", "member", "admin")
    pub role: String,

    /// When the user joined
    pub joined_at: DateTime<Utc>,

    /// Who invited this user (if applicable)
    pub invited_by: Option<Uuid>,
}

impl BoardMember {
    /// Creates a new board membership joined now.
    ///
    /// # Arguments
    ///
    /// * `board_id` - The board ID
    /// * `user_id` - The user ID
    /// * `role` - The user's role on the board
    pub fn new(board_id: Uuid, user_id: Uuid, role: impl Into<String>) -> Self {
        Self {
            board_id,
            user_id,
            role: role.into(),
            joined_at: Utc::now(),
            invited_by: None,
        }
    }

    /// Set who invited this user.
    ///
    /// # Arguments
    ///
    /// * `inviter_id` - The user ID of who invited this user
    pub fn with_inviter(mut self, inviter_id: Uuid) -> Self {
        self.invited_by = Some(inviter_id);
        self
    }

    /// Replace the member's role.
    pub fn set_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }

    /// The uniqueness key of this membership.
    pub fn key(&self) -> (Uuid, Uuid) {
        (self.board_id, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_member_creation() {
        let board_id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let member = BoardMember::new(board_id, user_id, "viewer");

        assert_eq!(member.board_id, board_id);
        assert_eq!(member.user_id, user_id);
        assert_eq!(member.role, "viewer");
        assert!(member.invited_by.is_none());
        assert_eq!(member.key(), (board_id, user_id));
    }

    #[test]
    fn test_board_member_with_inviter() {
        let inviter_id = Uuid::now_v7();
        let member = BoardMember::new(Uuid::now_v7(), Uuid::now_v7(), "member").with_inviter(inviter_id);

        assert_eq!(member.invited_by, Some(inviter_id));
    }

    #[test]
    fn test_set_role() {
        let mut member = BoardMember::new(Uuid::now_v7(), Uuid::now_v7(), "viewer");
        member.set_role("admin");
        assert_eq!(member.role, "admin");
    }

    #[test]
    fn test_serde_shape() {
        let member = BoardMember::new(Uuid::now_v7(), Uuid::now_v7(), "member");
        let json = serde_json::to_value(&member).unwrap();
        assert_eq!(json["role"], "member");
        assert!(json["invited_by"].is_null());

        let back: BoardMember = serde_json::from_value(json).unwrap();
        assert_eq!(back, member);
    }
}
