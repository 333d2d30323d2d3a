//! HTML screens
//!
//! Each role screen keeps a state struct owning the collections it fetched:
//! `load` fills it from the backend, actions call the backend and update the
//! local copy, and the view renders it. Handlers are stateless between
//! requests; the browser's cookies carry the session.

pub mod chef;
pub mod home;
pub mod layout;
pub mod login;
pub mod manager;
pub mod waiter;

use axum::response::Redirect;
use koala_client::HttpClient;
use shared::Role;

use crate::auth::CurrentSession;
use crate::core::ServerState;

/// Backend client for a role screen, or a redirect to where this session belongs
///
/// A signed-in user opening another role's screen is sent to their own home.
pub(crate) fn role_client(
    state: &ServerState,
    session: &CurrentSession,
    role: Role,
) -> Result<HttpClient, Redirect> {
    if session.is_authenticated() && session.role() == Some(role) {
        Ok(state.client_for(session))
    } else {
        let target = session.destination();
        tracing::debug!(screen = %role, redirect = %target, "Screen not available for this session");
        Err(Redirect::to(target.path()))
    }
}
