//! Navigation
//!
//! Views the till can show, and the access gate in front of each of them.

use std::fmt;

use crate::{orders::OrderId, session::Session};

/// A destination in the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Login form
    Login,

    /// Landing page
    Home,

    /// Catalog + cart
    Order,

    /// Order history list
    OrderHistory,

    /// Single order detail
    ViewOrder(OrderId),

    /// Customer management
    Customers,

    /// Sales report
    Report,
}

/// What a view requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone
    Public,

    /// A validated token
    Authenticated,

    /// A validated token with the administrative role
    Administrative,
}

/// Outcome of gating a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Show the requested view.
    Allow,

    /// Show another view instead.
    Redirect(View),
}

impl View {
    /// Access level required to show the view.
    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Self::Login => Access::Public,
            Self::Home | Self::Order | Self::OrderHistory | Self::ViewOrder(_) => {
                Access::Authenticated
            }
            Self::Customers | Self::Report => Access::Administrative,
        }
    }

    /// Where a login should land, given the backend's redirect hint.
    #[must_use]
    pub fn from_redirect_hint(hint: &str) -> Self {
        match hint.trim_end_matches('/') {
            "/report" => Self::Report,
            "/customers" => Self::Customers,
            "/history" | "/orders" => Self::OrderHistory,
            "" | "/" => Self::Home,
            _ => Self::Order,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => f.write_str("/login"),
            Self::Home => f.write_str("/"),
            Self::Order => f.write_str("/order"),
            Self::OrderHistory => f.write_str("/history"),
            Self::ViewOrder(id) => write!(f, "/orders/{id}"),
            Self::Customers => f.write_str("/customers"),
            Self::Report => f.write_str("/report"),
        }
    }
}

/// Decide whether `view` may be shown for `session`.
///
/// Unauthenticated users go to login. Authenticated users without the
/// administrative role are sent to the order view rather than an error page.
pub fn gate(view: View, session: Option<&Session>) -> Gate {
    let authenticated = session.is_some_and(Session::is_authenticated);
    let admin = session.is_some_and(Session::is_admin);

    match view.access() {
        Access::Public => Gate::Allow,
        Access::Authenticated | Access::Administrative if !authenticated => {
            Gate::Redirect(View::Login)
        }
        Access::Administrative if !admin => Gate::Redirect(View::Order),
        Access::Authenticated | Access::Administrative => Gate::Allow,
    }
}

#[cfg(test)]
mod tests {
    use crate::session::{AccessToken, CurrentUser, Role, UserId};

    use super::*;

    fn session(role: Role) -> Session {
        Session::from_login(AccessToken::new("t"), role)
    }

    #[test]
    fn anonymous_users_are_sent_to_login() {
        assert_eq!(gate(View::Order, None), Gate::Redirect(View::Login));
        assert_eq!(gate(View::Report, None), Gate::Redirect(View::Login));
        assert_eq!(gate(View::Login, None), Gate::Allow);
    }

    #[test]
    fn unvalidated_tokens_are_not_authenticated() {
        let restored = Session::restored(AccessToken::new("t"), Role::Admin);

        assert_eq!(gate(View::Home, Some(&restored)), Gate::Redirect(View::Login));
    }

    #[test]
    fn sellers_are_redirected_away_from_admin_views() {
        let seller = session(Role::Seller);

        assert_eq!(gate(View::Order, Some(&seller)), Gate::Allow);
        assert_eq!(gate(View::Report, Some(&seller)), Gate::Redirect(View::Order));
        assert_eq!(gate(View::Customers, Some(&seller)), Gate::Redirect(View::Order));
    }

    #[test]
    fn admins_reach_everything() {
        let mut admin = Session::restored(AccessToken::new("t"), Role::Seller);
        admin.validate(CurrentUser {
            id: UserId::new(1),
            username: "boss".to_string(),
            email: "boss@example.com".to_string(),
            role: Role::Admin,
            is_active: true,
        });

        assert_eq!(gate(View::Report, Some(&admin)), Gate::Allow);
        assert_eq!(gate(View::ViewOrder(OrderId::new(3)), Some(&admin)), Gate::Allow);
    }

    #[test]
    fn redirect_hint_maps_to_views() {
        assert_eq!(View::from_redirect_hint("/report"), View::Report);
        assert_eq!(View::from_redirect_hint("/order"), View::Order);
        assert_eq!(View::from_redirect_hint("/unknown"), View::Order);
    }
}
