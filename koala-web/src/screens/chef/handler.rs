//! Chef Screen Handlers

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use shared::Role;
use uuid::Uuid;

use super::state::ChefScreen;
use super::view;
use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::screens::role_client;

/// GET /home/chef
pub async fn index(State(state): State<ServerState>, session: CurrentSession) -> Response {
    let http = match role_client(&state, &session, Role::Chef) {
        Ok(http) => http,
        Err(redirect) => return redirect.into_response(),
    };
    match ChefScreen::load(&http).await {
        Ok(screen) => view::dishes(&screen, None),
        Err(e) => view::dishes(&ChefScreen::default(), Some(&e)),
    }
}

/// POST /home/chef/dishes/{id}/advance
pub async fn advance(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(dish_id): Path<Uuid>,
) -> Response {
    let http = match role_client(&state, &session, Role::Chef) {
        Ok(http) => http,
        Err(redirect) => return redirect.into_response(),
    };
    let mut screen = match ChefScreen::load(&http).await {
        Ok(screen) => screen,
        Err(e) => return view::dishes(&ChefScreen::default(), Some(&e)),
    };
    let result = screen.advance(&http, dish_id).await;
    view::dishes(&screen, result.err().as_ref())
}
