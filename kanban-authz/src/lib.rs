//! # Kanban Authorization
//!
//! This crate decides whether an actor may perform an action, combining
//! account-wide system roles with per-board roles.
//!
//! ## Overview
//!
//! The kanban-authz crate handles:
//! - **Resolution**: System claims, board ownership, membership and public visibility
//! - **Gate**: Request-boundary checks against a declared [`Requirement`]
//! - **Stores**: Collaborator traits for identity and board state
//! - **Errors**: Structural failures kept distinct from denials
//!
//! ## Resolution order
//!
//! ```text
//! Gate
//!   ├─ no actor ─────────────────→ deny
//!   ├─ system permission ────────→ allow
//!   ├─ no board id ──────────────→ deny
//!   └─ PermissionService::check_board_permission
//!         ├─ board missing ──────→ Err(BoardNotFound)
//!         ├─ owner ──────────────→ allow "Board owner"
//!         ├─ no membership
//!         │    ├─ view + public ─→ allow "Public board view access"
//!         │    └─ otherwise ─────→ deny  "User is not a board member"
//!         └─ role tier contains permission?
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use kanban_authz::{
//!     AuthorizationGate, GateConfig, MemoryBoardStore, MemoryIdentityStore,
//!     PermissionService, RequestContext, Requirement,
//! };
//! use kanban_rbac::{AuthzRegistry, Permission};
//!
//! async fn handle(ctx: &dyn RequestContext) -> kanban_authz::AuthzResult<()> {
//!     let service = PermissionService::new(
//!         Arc::new(AuthzRegistry::standard()),
//!         Arc::new(MemoryIdentityStore::new()),
//!         Arc::new(MemoryBoardStore::new()),
//!     );
//!     let gate = AuthorizationGate::new(service, &GateConfig::from_env().expect("config"));
//!
//!     gate.enforce(ctx, &Requirement::new(Permission::CardsCreate)).await
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `memory` (default): In-memory stores for tests and single-process use
//!
//! ## Logging
//!
//! Decisions are reported through `tracing`; install a subscriber in the
//! host application to see them.

pub mod config;
pub mod error;
pub mod gate;
#[cfg(feature = "memory")]
pub mod memory;
pub mod service;
pub mod store;

// Re-export main types
pub use config::{ConfigError, GateConfig};
pub use error::{AuthzError, AuthzResult, StoreError, StoreResult};
pub use gate::{AuthorizationGate, RequestContext, Requirement, ResourceIdSource};
#[cfg(feature = "memory")]
pub use memory::{MemoryBoardStore, MemoryIdentityStore};
pub use service::PermissionService;
pub use store::{BoardStore, IdentityStore};
