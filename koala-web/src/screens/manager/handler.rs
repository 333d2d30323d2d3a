//! Manager Screen Handlers

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use koala_client::HttpClient;
use shared::{AppResult, Role};
use uuid::Uuid;

use super::state::{ItemForm, ManagerScreen, SectionForm};
use super::view;
use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::screens::role_client;

/// One menu change posted by the manager
enum MenuChange {
    AddSection(SectionForm),
    DeleteSection(u32),
    AddItem(u32, ItemForm),
    UpdateItem(Uuid, ItemForm),
    DeleteItem(Uuid),
}

impl MenuChange {
    async fn apply(&self, screen: &mut ManagerScreen, http: &HttpClient) -> AppResult<()> {
        match self {
            Self::AddSection(form) => screen.add_section(http, form).await,
            Self::DeleteSection(id) => screen.delete_section(http, *id).await,
            Self::AddItem(section_id, form) => screen.add_item(http, *section_id, form).await,
            Self::UpdateItem(id, form) => screen.update_item(http, *id, form).await,
            Self::DeleteItem(id) => screen.delete_item(http, *id).await,
        }
    }
}

/// Load the menu, run one change, render the result
///
/// Failures keep the last menu that loaded and show a banner.
async fn mutate(state: &ServerState, session: &CurrentSession, change: MenuChange) -> Response {
    let http = match role_client(state, session, Role::Manager) {
        Ok(http) => http,
        Err(redirect) => return redirect.into_response(),
    };
    let mut screen = match ManagerScreen::load(&http).await {
        Ok(screen) => screen,
        Err(e) => return view::menu(&ManagerScreen::default(), Some(&e)),
    };
    match change.apply(&mut screen, &http).await {
        Ok(()) => view::menu(&screen, None),
        Err(e) => {
            tracing::warn!(code = %e.code, error = %e, "Menu change failed");
            view::menu(&screen, Some(&e))
        }
    }
}

/// GET /home/manager
pub async fn index(State(state): State<ServerState>, session: CurrentSession) -> Response {
    let http = match role_client(&state, &session, Role::Manager) {
        Ok(http) => http,
        Err(redirect) => return redirect.into_response(),
    };
    match ManagerScreen::load(&http).await {
        Ok(screen) => view::menu(&screen, None),
        Err(e) => view::menu(&ManagerScreen::default(), Some(&e)),
    }
}

/// POST /home/manager/sections
pub async fn add_section(
    State(state): State<ServerState>,
    session: CurrentSession,
    Form(form): Form<SectionForm>,
) -> Response {
    mutate(&state, &session, MenuChange::AddSection(form)).await
}

/// POST /home/manager/sections/{id}/delete
pub async fn delete_section(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(section_id): Path<u32>,
) -> Response {
    mutate(&state, &session, MenuChange::DeleteSection(section_id)).await
}

/// POST /home/manager/sections/{id}/items
pub async fn add_item(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(section_id): Path<u32>,
    Form(form): Form<ItemForm>,
) -> Response {
    mutate(&state, &session, MenuChange::AddItem(section_id, form)).await
}

/// POST /home/manager/items/{id}
pub async fn update_item(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(item_id): Path<Uuid>,
    Form(form): Form<ItemForm>,
) -> Response {
    mutate(&state, &session, MenuChange::UpdateItem(item_id, form)).await
}

/// POST /home/manager/items/{id}/delete
pub async fn delete_item(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(item_id): Path<Uuid>,
) -> Response {
    mutate(&state, &session, MenuChange::DeleteItem(item_id)).await
}
