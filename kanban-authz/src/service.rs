//! Permission resolution
//!
//! Combines system-role claims with board ownership, membership and
//! visibility to decide whether a user may perform an action. Every call
//! re-reads its collaborators; nothing is cached between calls.

use kanban_rbac::{AuthzRegistry, BoardRole, Decision, Permission, PermissionSet};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::error::{AuthzError, AuthzResult, StoreError};
use crate::store::{BoardStore, IdentityStore};

/// Reason given when the actor owns the board.
pub const REASON_BOARD_OWNER: &str = "Board owner";
/// Reason given when a non-member views a public board.
pub const REASON_PUBLIC_VIEW: &str = "Public board view access";
/// Reason given when a non-member is refused.
pub const REASON_NOT_MEMBER: &str = "User is not a board member";

fn store_failure(error: StoreError) -> AuthzError {
    warn!(error = %error, "Authorization store read failed");
    AuthzError::DependencyUnavailable(error)
}

/// Resolves system and board permissions for users.
///
/// Cheap to clone; clones share the registry and stores.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use kanban_authz::{MemoryBoardStore, MemoryIdentityStore, PermissionService};
/// use kanban_rbac::{AuthzRegistry, Permission};
/// use uuid::Uuid;
///
/// async fn example(user_id: Uuid, board_id: Uuid) -> kanban_authz::AuthzResult<()> {
///     let service = PermissionService::new(
///         Arc::new(AuthzRegistry::standard()),
///         Arc::new(MemoryIdentityStore::new()),
///         Arc::new(MemoryBoardStore::new()),
///     );
///
///     let decision = service
///         .check_board_permission(user_id, board_id, Permission::CardsCreate)
///         .await?;
///     println!("{}: {}", decision.granted, decision.reason);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PermissionService {
    registry: Arc<AuthzRegistry>,
    identity: Arc<dyn IdentityStore>,
    boards: Arc<dyn BoardStore>,
}

impl std::fmt::Debug for PermissionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionService")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl PermissionService {
    /// Create a resolution service over the given registry and stores.
    pub fn new(
        registry: Arc<AuthzRegistry>,
        identity: Arc<dyn IdentityStore>,
        boards: Arc<dyn BoardStore>,
    ) -> Self {
        Self {
            registry,
            identity,
            boards,
        }
    }

    /// The registry this service resolves against.
    pub fn registry(&self) -> &AuthzRegistry {
        &self.registry
    }

    /// Whether any of the user's system roles, or a direct claim, grants
    /// `permission`.
    #[instrument(skip(self))]
    pub async fn has_system_permission(&self, user_id: Uuid, permission: Permission) -> AuthzResult<bool> {
        let wanted = permission.as_str();

        let roles = self.identity.system_roles(user_id).await.map_err(store_failure)?;
        for role in &roles {
            let claims = self.identity.role_claims(role).await.map_err(store_failure)?;
            if claims.iter().any(|c| c == wanted) {
                debug!(role = %role, "System permission granted by role");
                return Ok(true);
            }
        }

        let direct = self.identity.user_claims(user_id).await.map_err(store_failure)?;
        let granted = direct.iter().any(|c| c == wanted);
        if granted {
            debug!("System permission granted by direct claim");
        }
        Ok(granted)
    }

    /// Decide whether `user_id` holds `permission` on `board_id`.
    ///
    /// Resolution order:
    /// 1. The board must exist, otherwise [`AuthzError::BoardNotFound`].
    /// 2. The owner is granted everything without a membership lookup.
    /// 3. Without a membership, only viewing a public board is granted.
    /// 4. Otherwise the member's role tier decides.
    #[instrument(skip(self))]
    pub async fn check_board_permission(
        &self,
        user_id: Uuid,
        board_id: Uuid,
        permission: Permission,
    ) -> AuthzResult<Decision> {
        let Some(board) = self.boards.board(board_id).await.map_err(store_failure)? else {
            debug!("Board not found");
            return Err(AuthzError::BoardNotFound(board_id));
        };

        if board.is_owned_by(user_id) {
            debug!("Granted as board owner");
            return Ok(Decision::allow(REASON_BOARD_OWNER));
        }

        let Some(member) = self
            .boards
            .membership(board_id, user_id)
            .await
            .map_err(store_failure)?
        else {
            if permission == Permission::BoardsView && board.is_public() {
                debug!("Granted public view to non-member");
                return Ok(Decision::allow(REASON_PUBLIC_VIEW));
            }
            debug!("Denied non-member");
            return Ok(Decision::deny(REASON_NOT_MEMBER));
        };

        let granted = self.registry.permissions_for(&member.role).has(permission);
        debug!(role = %member.role, granted, "Resolved by board role");

        if granted {
            Ok(Decision::allow(format!("Granted via board role '{}'", member.role)))
        } else {
            Ok(Decision::deny(format!(
                "Board role '{}' lacks permission '{}'",
                member.role, permission
            )))
        }
    }

    /// Like [`PermissionService::check_board_permission`], but a denial
    /// becomes [`AuthzError::Forbidden`].
    pub async fn require_board_permission(
        &self,
        user_id: Uuid,
        board_id: Uuid,
        permission: Permission,
    ) -> AuthzResult<()> {
        let decision = self.check_board_permission(user_id, board_id, permission).await?;
        if decision.granted {
            Ok(())
        } else {
            Err(AuthzError::Forbidden)
        }
    }

    /// Union of every claim from the user's system roles and direct claims.
    ///
    /// Claims outside the catalog are dropped.
    #[instrument(skip(self))]
    pub async fn get_user_system_permissions(&self, user_id: Uuid) -> AuthzResult<PermissionSet> {
        let mut permissions = PermissionSet::new();

        let roles = self.identity.system_roles(user_id).await.map_err(store_failure)?;
        for role in &roles {
            let claims = self.identity.role_claims(role).await.map_err(store_failure)?;
            permissions.merge(&PermissionSet::from_strings(claims));
        }

        let direct = self.identity.user_claims(user_id).await.map_err(store_failure)?;
        permissions.merge(&PermissionSet::from_strings(direct));

        Ok(permissions)
    }

    /// Board permissions for every board the user owns or belongs to.
    ///
    /// Owned boards map to the full owner tier; memberships map to their
    /// role's tier (empty for an unrecognized role). When a user both owns a
    /// board and has a membership row on it, ownership wins.
    #[instrument(skip(self))]
    pub async fn get_user_board_permissions(
        &self,
        user_id: Uuid,
    ) -> AuthzResult<HashMap<Uuid, PermissionSet>> {
        let (owned, memberships) = tokio::try_join!(
            self.boards.owned_board_ids(user_id),
            self.boards.memberships_for_user(user_id),
        )
        .map_err(store_failure)?;

        let mut result: HashMap<Uuid, PermissionSet> = memberships
            .into_iter()
            .map(|m| (m.board_id, self.registry.permissions_for(&m.role)))
            .collect();

        let owner_tier = self.registry.tier(BoardRole::Owner);
        for board_id in owned {
            result.insert(board_id, owner_tier.clone());
        }

        debug!(boards = result.len(), "Hydrated board permissions");
        Ok(result)
    }
}

#[cfg(all(test, feature = "memory"))]
mod tests {
    use super::*;
    use crate::memory::{MemoryBoardStore, MemoryIdentityStore};
    use kanban_board::{Board, BoardMember, BoardVisibility};

    struct Fixture {
        service: PermissionService,
        identity: MemoryIdentityStore,
        boards: MemoryBoardStore,
    }

    fn fixture() -> Fixture {
        let identity = MemoryIdentityStore::new();
        let boards = MemoryBoardStore::new();
        let service = PermissionService::new(
            Arc::new(AuthzRegistry::standard()),
            Arc::new(identity.clone()),
            Arc::new(boards.clone()),
        );
        Fixture {
            service,
            identity,
            boards,
        }
    }

    #[tokio::test]
    async fn test_owner_short_circuits() {
        let f = fixture();
        let owner = Uuid::now_v7();
        let board = Board::new("Roadmap", owner);
        let board_id = board.id;
        f.boards.insert_board(board).await;
        // A stale viewer row must not narrow the owner's access.
        f.boards.upsert_member(BoardMember::new(board_id, owner, "viewer")).await;

        for perm in Permission::all() {
            let decision = f.service.check_board_permission(owner, board_id, *perm).await.unwrap();
            assert_eq!(decision, Decision::allow(REASON_BOARD_OWNER));
        }
    }

    #[tokio::test]
    async fn test_member_role_reason_names_role() {
        let f = fixture();
        let board = Board::new("Roadmap", Uuid::now_v7());
        let board_id = board.id;
        let user = Uuid::now_v7();
        f.boards.insert_board(board).await;
        f.boards.upsert_member(BoardMember::new(board_id, user, "Member")).await;

        let granted = f
            .service
            .check_board_permission(user, board_id, Permission::CardsMove)
            .await
            .unwrap();
        assert!(granted.granted);
        assert!(granted.reason().contains("Member"));

        let denied = f
            .service
            .check_board_permission(user, board_id, Permission::ColumnsDelete)
            .await
            .unwrap();
        assert!(!denied.granted);
        assert!(denied.reason().contains("Member"));
    }

    #[tokio::test]
    async fn test_unknown_member_role_fails_closed() {
        let f = fixture();
        let board = Board::new("Roadmap", Uuid::now_v7()).with_visibility(BoardVisibility::Public);
        let board_id = board.id;
        let user = Uuid::now_v7();
        f.boards.insert_board(board).await;
        f.boards.upsert_member(BoardMember::new(board_id, user, "superuser")).await;

        let decision = f
            .service
            .check_board_permission(user, board_id, Permission::CardsView)
            .await
            .unwrap();
        assert!(!decision.granted);
    }

    #[tokio::test]
    async fn test_missing_board_is_not_a_denial() {
        let f = fixture();
        let missing = Uuid::now_v7();
        let err = f
            .service
            .check_board_permission(Uuid::now_v7(), missing, Permission::BoardsView)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthzError::BoardNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn test_removed_board_is_not_found_not_forbidden() {
        let f = fixture();
        let owner = Uuid::now_v7();
        let board = Board::new("Archive", owner);
        let board_id = board.id;
        f.boards.insert_board(board).await;
        f.boards.remove_board(board_id).await;

        let err = f
            .service
            .require_board_permission(owner, board_id, Permission::BoardsView)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthzError::BoardNotFound(id) if id == board_id));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_require_board_permission() {
        let f = fixture();
        let board = Board::new("Roadmap", Uuid::now_v7());
        let board_id = board.id;
        let user = Uuid::now_v7();
        f.boards.insert_board(board).await;
        f.boards.upsert_member(BoardMember::new(board_id, user, "viewer")).await;

        assert!(f
            .service
            .require_board_permission(user, board_id, Permission::BoardsView)
            .await
            .is_ok());
        assert!(matches!(
            f.service
                .require_board_permission(user, board_id, Permission::CardsEdit)
                .await,
            Err(AuthzError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn test_system_permission_sources() {
        let f = fixture();
        let admin = Uuid::now_v7();
        let user = Uuid::now_v7();
        f.identity.assign_system_role(admin, "Admin").await;
        f.identity
            .set_role_claims("Admin", ["admin.manage_users", "admin.view_all_boards"])
            .await;
        f.identity.grant_user_claim(user, "boards.create").await;

        assert!(f.service.has_system_permission(admin, Permission::AdminManageUsers).await.unwrap());
        assert!(!f.service.has_system_permission(admin, Permission::AdminManageRoles).await.unwrap());
        assert!(f.service.has_system_permission(user, Permission::BoardsCreate).await.unwrap());
        assert!(!f.service.has_system_permission(user, Permission::AdminManageUsers).await.unwrap());
    }

    #[tokio::test]
    async fn test_system_permissions_union() {
        let f = fixture();
        let user = Uuid::now_v7();
        f.identity.assign_system_role(user, "User").await;
        f.identity.assign_system_role(user, "Admin").await;
        f.identity.set_role_claims("User", ["boards.create"]).await;
        f.identity.set_role_claims("Admin", ["admin.manage_users", "not.a.permission"]).await;
        f.identity.grant_user_claim(user, "admin.view_audit_log").await;

        let perms = f.service.get_user_system_permissions(user).await.unwrap();
        assert_eq!(
            perms.to_strings(),
            vec!["admin.manage_users", "admin.view_audit_log", "boards.create"]
        );
    }
}
