use gatherly_shared::models::{Role, User};

use crate::auth::AuthPhase;

/// Navigable view ids. `Home` doubles as the fallback for anything
/// unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewId {
    #[default]
    Home,
    Rsvp,
    Schedule,
    Events,
    Location,
    Guests,
    Profile,
}

impl ViewId {
    pub const ALL: [ViewId; 7] = [
        ViewId::Home,
        ViewId::Rsvp,
        ViewId::Schedule,
        ViewId::Events,
        ViewId::Location,
        ViewId::Guests,
        ViewId::Profile,
    ];
}

/// What actually gets rendered after gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Login,
    OtpChallenge,
    AccessDenied,
    AdminDashboard,
    GuestHome,
    RsvpList,
    Schedule,
    MiniEvents,
    Location,
    Guests,
    Profile,
}

/// Pure access gate: session state in, renderable screen out. Called on every
/// render so a revoked verification takes effect on the next navigation.
pub fn resolve(loading: bool, phase: AuthPhase, user: Option<&User>, view: ViewId) -> Screen {
    if loading {
        return Screen::Loading;
    }

    match phase {
        AuthPhase::PendingVerification => Screen::OtpChallenge,
        AuthPhase::Anonymous => Screen::Login,
        AuthPhase::Authenticated => {
            let user = match user {
                Some(user) => user,
                None => return Screen::Login,
            };

            if !user.is_verified {
                return Screen::AccessDenied;
            }

            let home = match user.role {
                Role::Admin => Screen::AdminDashboard,
                Role::Guest => Screen::GuestHome,
            };

            match view {
                ViewId::Home => home,
                ViewId::Rsvp => Screen::RsvpList,
                ViewId::Schedule => Screen::Schedule,
                ViewId::Events => Screen::MiniEvents,
                ViewId::Location => Screen::Location,
                ViewId::Guests => Screen::Guests,
                ViewId::Profile => Screen::Profile,
            }
        }
    }
}
