//! Authorization gate
//!
//! The request-boundary adapter. Given the current request and a declared
//! [`Requirement`], it checks system permissions first and falls back to
//! board-level resolution, recovering the board id from the request when the
//! requirement does not name one.
//!
//! The gate never sees a transport-specific request type: the web layer
//! implements [`RequestContext`] over its own request object.

use kanban_rbac::{Decision, Permission};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::config::GateConfig;
use crate::error::{AuthzError, AuthzResult};
use crate::service::PermissionService;

/// Reason given when no actor is authenticated.
pub const REASON_UNAUTHENTICATED: &str = "Unauthenticated";
/// Reason given when a system permission grants the action.
pub const REASON_SYSTEM_PERMISSION: &str = "System permission";
/// Reason given when no board id can be found for a board-level check.
pub const REASON_NO_BOARD_ID: &str = "No board id in request";

/// Read-only view of the current request, supplied by the web layer.
pub trait RequestContext: Send + Sync {
    /// The authenticated actor, if any.
    fn actor_id(&self) -> Option<Uuid>;

    /// A route parameter by name.
    fn route_value(&self, key: &str) -> Option<String>;

    /// A query-string parameter by name.
    fn query_value(&self, key: &str) -> Option<String>;
}

/// One named place to look for a board id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceIdSource {
    /// A route parameter
    Route(String),
    /// A query-string parameter
    Query(String),
}

impl ResourceIdSource {
    /// The parameter name.
    pub fn key(&self) -> &str {
        match self {
            Self::Route(key) | Self::Query(key) => key,
        }
    }

    /// Which part of the request this source reads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Route(_) => "route",
            Self::Query(_) => "query",
        }
    }

    /// Read this source from a request.
    pub fn extract(&self, ctx: &dyn RequestContext) -> Option<String> {
        match self {
            Self::Route(key) => ctx.route_value(key),
            Self::Query(key) => ctx.query_value(key),
        }
    }
}

/// A declared permission requirement, optionally bound to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// The permission the action needs.
    pub permission: Permission,
    /// The board to check, when known up front.
    pub board_id: Option<Uuid>,
}

impl Requirement {
    /// A requirement whose board id is recovered from the request.
    pub fn new(permission: Permission) -> Self {
        Self {
            permission,
            board_id: None,
        }
    }

    /// Bind the requirement to an explicit board.
    pub fn on_board(mut self, board_id: Uuid) -> Self {
        self.board_id = Some(board_id);
        self
    }
}

/// Stateless gate in front of [`PermissionService`].
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    service: PermissionService,
    sources: Vec<ResourceIdSource>,
}

impl AuthorizationGate {
    /// Create a gate using the lookup sequence from `config`.
    pub fn new(service: PermissionService, config: &GateConfig) -> Self {
        Self::with_sources(service, config.sources())
    }

    /// Create a gate with an explicit lookup sequence.
    pub fn with_sources(service: PermissionService, sources: Vec<ResourceIdSource>) -> Self {
        Self { service, sources }
    }

    /// The underlying resolution service.
    pub fn service(&self) -> &PermissionService {
        &self.service
    }

    /// Decide whether the request satisfies `requirement`.
    ///
    /// A missing board propagates as [`AuthzError::BoardNotFound`]; store
    /// failures propagate as [`AuthzError::DependencyUnavailable`].
    #[instrument(skip(self, ctx, requirement), fields(permission = %requirement.permission))]
    pub async fn authorize(
        &self,
        ctx: &dyn RequestContext,
        requirement: &Requirement,
    ) -> AuthzResult<Decision> {
        let Some(actor_id) = ctx.actor_id() else {
            info!("Denied: no authenticated actor");
            return Ok(Decision::deny(REASON_UNAUTHENTICATED));
        };

        if self
            .service
            .has_system_permission(actor_id, requirement.permission)
            .await?
        {
            debug!(actor_id = %actor_id, "Granted by system permission");
            return Ok(Decision::allow(REASON_SYSTEM_PERMISSION));
        }

        let Some(board_id) = self.resolve_board_id(ctx, requirement) else {
            info!(actor_id = %actor_id, "Denied: no board id in request");
            return Ok(Decision::deny(REASON_NO_BOARD_ID));
        };

        let decision = self
            .service
            .check_board_permission(actor_id, board_id, requirement.permission)
            .await
            .inspect_err(|err| debug!(actor_id = %actor_id, board_id = %board_id, error = %err, "Board check failed"))?;
        if decision.granted {
            debug!(actor_id = %actor_id, board_id = %board_id, reason = %decision.reason, "Granted by board permission");
        } else {
            info!(actor_id = %actor_id, board_id = %board_id, reason = %decision.reason, "Denied by board permission");
        }
        Ok(decision)
    }

    /// Like [`AuthorizationGate::authorize`], but a denial becomes an error:
    /// [`AuthzError::Unauthenticated`] without an actor, otherwise
    /// [`AuthzError::Forbidden`].
    pub async fn enforce(&self, ctx: &dyn RequestContext, requirement: &Requirement) -> AuthzResult<()> {
        if ctx.actor_id().is_none() {
            info!(permission = %requirement.permission, "Denied: no authenticated actor");
            return Err(AuthzError::Unauthenticated);
        }
        let decision = self.authorize(ctx, requirement).await?;
        if decision.granted {
            Ok(())
        } else {
            Err(AuthzError::Forbidden)
        }
    }

    /// Explicit id first, then each configured source in order. Values that
    /// are not UUIDs are skipped.
    fn resolve_board_id(&self, ctx: &dyn RequestContext, requirement: &Requirement) -> Option<Uuid> {
        if requirement.board_id.is_some() {
            return requirement.board_id;
        }
        self.sources.iter().find_map(|source| {
            let raw = source.extract(ctx)?;
            match Uuid::parse_str(raw.trim()) {
                Ok(id) => Some(id),
                Err(_) => {
                    debug!(source = source.kind(), key = source.key(), value = %raw, "Ignoring non-UUID board id");
                    None
                }
            }
        })
    }
}
