//! Grant/deny outcomes.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Outcome of a permission check or role-management gate.
///
/// A denial is an ordinary value, not an error. The reason is a diagnostic
/// string and not something callers should branch on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the action is allowed.
    pub granted: bool,
    /// Why the decision was reached.
    pub reason: Cow<'static, str>,
}

impl Decision {
    /// Reason attached to an allowed role-management change.
    pub const OK: &'static str = "OK";

    /// An allowing decision.
    pub fn allow(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            granted: true,
            reason: reason.into(),
        }
    }

    /// A denying decision.
    pub fn deny(reason: impl Into<Cow<'static, str>>) -> Self {
        Self {
            granted: false,
            reason: reason.into(),
        }
    }

    /// Allowing decision with the standard `"OK"` reason.
    pub fn ok() -> Self {
        Self::allow(Self::OK)
    }

    /// Whether the action is allowed.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// The diagnostic reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl From<Decision> for (bool, String) {
    fn from(decision: Decision) -> Self {
        (decision.granted, decision.reason.into_owned())
    }
}
