//! crates/semey_guide_core/src/router.rs
//!
//! View routing and access arbitration. The application has four views;
//! two of them require an active session. The single guard rule: asking
//! for a gated view while signed out redirects to the auth view, which
//! remembers the originally requested view so a successful sign-in can
//! return the user there.

use serde::{Deserialize, Serialize};

/// The four named views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Map,
    Auth,
    Onboarding,
    Profile,
}

impl ViewId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Map => "map",
            ViewId::Auth => "auth",
            ViewId::Onboarding => "onboarding",
            ViewId::Profile => "profile",
        }
    }

    /// Parses a normalized view name. Unknown names are not views.
    pub fn parse(name: &str) -> Option<ViewId> {
        match name {
            "map" => Some(ViewId::Map),
            "auth" => Some(ViewId::Auth),
            "onboarding" => Some(ViewId::Onboarding),
            "profile" => Some(ViewId::Profile),
            _ => None,
        }
    }

    pub fn requires_session(&self) -> bool {
        matches!(self, ViewId::Onboarding | ViewId::Profile)
    }
}

/// The outcome of a view request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Granted(ViewId),
    /// Redirect to the auth view, remembering where the user wanted to go.
    RedirectToAuth { return_to: ViewId },
}

/// Arbitrates access to a requested view.
pub fn resolve(requested: ViewId, signed_in: bool) -> Resolution {
    if requested.requires_session() && !signed_in {
        Resolution::RedirectToAuth {
            return_to: requested,
        }
    } else {
        Resolution::Granted(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gated_views_redirect_when_signed_out() {
        assert_eq!(
            resolve(ViewId::Profile, false),
            Resolution::RedirectToAuth {
                return_to: ViewId::Profile
            }
        );
        assert_eq!(
            resolve(ViewId::Onboarding, false),
            Resolution::RedirectToAuth {
                return_to: ViewId::Onboarding
            }
        );
    }

    #[test]
    fn open_views_are_granted_signed_out() {
        assert_eq!(resolve(ViewId::Map, false), Resolution::Granted(ViewId::Map));
        assert_eq!(resolve(ViewId::Auth, false), Resolution::Granted(ViewId::Auth));
    }

    #[test]
    fn sign_in_returns_the_user_to_the_remembered_view() {
        // The redirect carries the original request; once a session exists
        // the same request resolves directly.
        let Resolution::RedirectToAuth { return_to } = resolve(ViewId::Profile, false) else {
            panic!("expected redirect");
        };
        assert_eq!(resolve(return_to, true), Resolution::Granted(ViewId::Profile));
    }

    #[test]
    fn view_names_round_trip() {
        for view in [ViewId::Map, ViewId::Auth, ViewId::Onboarding, ViewId::Profile] {
            assert_eq!(ViewId::parse(view.as_str()), Some(view));
        }
        assert_eq!(ViewId::parse("settings"), None);
    }
}
