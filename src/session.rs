//! Sessions
//!
//! The authenticated identity of the till user: an opaque bearer token plus the
//! role flags derived from it.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::ids::TypedId;

/// User Id
pub type UserId = TypedId<CurrentUser>;

/// Role code the backend uses for administrators.
pub const ADMIN_ROLE_CODE: i32 = 2;

/// Role code the backend assigns to plain sellers.
pub const SELLER_ROLE_CODE: i32 = 1;

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Role {
    /// Plain till user
    Seller,

    /// Unlocks reports and customer management
    Admin,
}

impl Role {
    /// Backend role code.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Seller => SELLER_ROLE_CODE,
            Self::Admin => ADMIN_ROLE_CODE,
        }
    }

    /// Check if the role is administrative.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl From<i32> for Role {
    fn from(code: i32) -> Self {
        if code == ADMIN_ROLE_CODE {
            Self::Admin
        } else {
            Self::Seller
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role.code()
    }
}

/// Opaque bearer token. Redacted in debug output and wiped on drop.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token text, for the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(**redacted**)")
    }
}

impl Drop for AccessToken {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// The user behind the current token, as reported by `/auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Email address
    pub email: String,

    /// Role
    pub role: Role,

    /// Whether the account is enabled
    #[serde(default)]
    pub is_active: bool,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    token: AccessToken,
    role: Role,
    #[serde(default)]
    user: Option<CurrentUser>,
    #[serde(skip)]
    validated: bool,
}

impl Session {
    /// Session created by a successful login. The server just issued the token,
    /// so it counts as validated.
    pub fn from_login(token: AccessToken, role: Role) -> Self {
        Self {
            token,
            role,
            user: None,
            validated: true,
        }
    }

    /// Session restored from storage; not trusted until [`Session::validate`].
    pub fn restored(token: AccessToken, role: Role) -> Self {
        Self {
            token,
            role,
            user: None,
            validated: false,
        }
    }

    /// Mark the token as confirmed by the backend and refresh the role from the user.
    pub fn validate(&mut self, user: CurrentUser) {
        self.role = user.role;
        self.user = Some(user);
        self.validated = true;
    }

    /// Bearer token.
    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Current role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// User details, once validated against `/auth/me`.
    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Check if the token has been confirmed by the backend.
    pub fn is_authenticated(&self) -> bool {
        self.validated
    }

    /// Check if the session unlocks administrative views.
    pub fn is_admin(&self) -> bool {
        self.validated && self.role.is_admin()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn user(role: Role) -> CurrentUser {
        CurrentUser {
            id: UserId::new(1),
            username: "mai".to_string(),
            email: "mai@example.com".to_string(),
            role,
            is_active: true,
        }
    }

    #[test]
    fn role_code_two_is_admin() {
        assert_eq!(Role::from(2), Role::Admin);
        assert_eq!(Role::from(1), Role::Seller);
        assert_eq!(Role::from(7), Role::Seller);
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = AccessToken::new("secret-token");

        assert_eq!(format!("{token:?}"), "AccessToken(**redacted**)");
        assert_eq!(token.expose(), "secret-token");
    }

    #[test]
    fn restored_session_is_not_authenticated_until_validated() {
        let mut session = Session::restored(AccessToken::new("t"), Role::Admin);

        assert!(!session.is_authenticated());
        assert!(!session.is_admin());

        session.validate(user(Role::Admin));

        assert!(session.is_authenticated());
        assert!(session.is_admin());
    }

    #[test]
    fn validation_refreshes_role() {
        let mut session = Session::restored(AccessToken::new("t"), Role::Admin);

        session.validate(user(Role::Seller));

        assert!(!session.is_admin());
    }

    #[test]
    fn persisted_session_restores_unvalidated() -> TestResult {
        let session = Session::from_login(AccessToken::new("t"), Role::Admin);

        let json = serde_json::to_string(&session)?;
        let restored: Session = serde_json::from_str(&json)?;

        assert_eq!(restored.token().expose(), "t");
        assert_eq!(restored.role(), Role::Admin);
        assert!(!restored.is_authenticated());

        Ok(())
    }
}
