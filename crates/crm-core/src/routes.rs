//! Route Table and Guard
//!
//! Every protected route is re-checked against the current session on every
//! render; the decision is never cached.

/// Sign-in view
pub const SIGN_IN_PATH: &str = "/auth";
/// Landing view after sign-in
pub const HOME_PATH: &str = "/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Auth,
    Dashboard,
    Contacts,
    ContactDetail,
    Deals,
    Websites,
    Forms,
    FormDetail,
}

impl AppRoute {
    pub const ALL: [AppRoute; 8] = [
        AppRoute::Auth,
        AppRoute::Dashboard,
        AppRoute::Contacts,
        AppRoute::ContactDetail,
        AppRoute::Deals,
        AppRoute::Websites,
        AppRoute::Forms,
        AppRoute::FormDetail,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            AppRoute::Auth => SIGN_IN_PATH,
            AppRoute::Dashboard => HOME_PATH,
            AppRoute::Contacts => "/contacts",
            AppRoute::ContactDetail => "/contacts/:id",
            AppRoute::Deals => "/deals",
            AppRoute::Websites => "/websites",
            AppRoute::Forms => "/forms",
            AppRoute::FormDetail => "/forms/:id",
        }
    }

    pub fn is_protected(self) -> bool {
        !matches!(self, AppRoute::Auth)
    }
}

/// Outcome of checking a route against the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the view inside the app chrome
    Render,
    /// Navigate away; `replace` swaps the history entry so Back does not loop
    Redirect { to: &'static str, replace: bool },
}

pub fn guard(route: AppRoute, authenticated: bool) -> RouteDecision {
    if route.is_protected() && !authenticated {
        RouteDecision::Redirect { to: SIGN_IN_PATH, replace: true }
    } else {
        RouteDecision::Render
    }
}

/// Where an unmatched path goes: `/` lands on the dashboard, anything else on sign-in
pub fn fallback_redirect(path: &str) -> &'static str {
    if path == "/" || path.is_empty() {
        HOME_PATH
    } else {
        SIGN_IN_PATH
    }
}

/// Top navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { name: "Dashboard", href: HOME_PATH },
    NavItem { name: "Contacts", href: "/contacts" },
    NavItem { name: "Deals", href: "/deals" },
    NavItem { name: "Websites", href: "/websites" },
    NavItem { name: "Forms", href: "/forms" },
];

/// Nav highlighting by path prefix, so `/contacts/42` lights up "Contacts"
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path.starts_with(href)
}

pub fn contact_path(id: &str) -> String {
    format!("/contacts/{}", id)
}

pub fn form_path(id: &str) -> String {
    format!("/forms/{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_without_session() {
        for route in AppRoute::ALL.into_iter().filter(|r| r.is_protected()) {
            assert_eq!(
                guard(route, false),
                RouteDecision::Redirect { to: SIGN_IN_PATH, replace: true },
                "{:?}",
                route
            );
        }
    }

    #[test]
    fn test_protected_routes_render_with_session() {
        for route in AppRoute::ALL {
            assert_eq!(guard(route, true), RouteDecision::Render, "{:?}", route);
        }
    }

    #[test]
    fn test_sign_in_is_public() {
        assert!(!AppRoute::Auth.is_protected());
        assert_eq!(guard(AppRoute::Auth, false), RouteDecision::Render);
    }

    #[test]
    fn test_fallback_redirect() {
        assert_eq!(fallback_redirect("/"), HOME_PATH);
        assert_eq!(fallback_redirect("/nope"), SIGN_IN_PATH);
    }

    #[test]
    fn test_nav_prefix_match() {
        assert!(is_active("/contacts/42", "/contacts"));
        assert!(is_active("/forms", "/forms"));
        assert!(!is_active("/deals", "/dashboard"));
        assert_eq!(contact_path("c-1"), "/contacts/c-1");
        assert_eq!(form_path("f-9"), "/forms/f-9");
    }
}
