//! Waiter Screen Handlers

use std::collections::HashMap;

use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use shared::{Role, RouteTarget};
use shared::models::OrderDraft;

use super::state::{OrderForm, OrderView, WaiterScreen, draft_from_fields};
use super::view;
use crate::auth::CurrentSession;
use crate::core::ServerState;
use crate::screens::role_client;

/// Back to the grid after a successful POST, so a reload re-fetches
/// instead of resubmitting
fn back_to_grid() -> Response {
    Redirect::to(RouteTarget::WaiterHome.path()).into_response()
}

macro_rules! waiter_client {
    ($state:expr, $session:expr) => {
        match role_client(&$state, &$session, Role::Waiter) {
            Ok(http) => http,
            Err(redirect) => return redirect.into_response(),
        }
    };
}

/// GET /home/waiter - 桌台网格
pub async fn index(State(state): State<ServerState>, session: CurrentSession) -> Response {
    let http = waiter_client!(state, session);
    match WaiterScreen::load(&http).await {
        Ok(screen) => view::tables(&screen, None),
        Err(e) => view::tables(&WaiterScreen::default(), Some(&e)),
    }
}

/// POST /home/waiter/tables/{id}/check-in - 入座
pub async fn check_in(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
) -> Response {
    let http = waiter_client!(state, session);
    let mut screen = match WaiterScreen::load(&http).await {
        Ok(screen) => screen,
        Err(e) => return view::tables(&WaiterScreen::default(), Some(&e)),
    };
    match screen.check_in(&http, table_id).await {
        Ok(()) => back_to_grid(),
        Err(e) => view::tables(&screen, Some(&e)),
    }
}

/// GET /home/waiter/tables/{id}/order/new - 点单表单
pub async fn new_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
) -> Response {
    let http = waiter_client!(state, session);
    order_form(&http, table_id, OrderDraft::new(), None).await
}

/// POST /home/waiter/tables/{id}/order/new - 调整数量
pub async fn adjust_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let http = waiter_client!(state, session);
    order_form(&http, table_id, draft_from_fields(&fields), None).await
}

/// POST /home/waiter/tables/{id}/order - 提交订单
pub async fn submit_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let http = waiter_client!(state, session);
    let draft = draft_from_fields(&fields);

    let mut screen = match WaiterScreen::load(&http).await {
        Ok(screen) => screen,
        Err(e) => return order_form(&http, table_id, draft, Some(e)).await,
    };
    match screen.submit_order(&http, table_id, &draft).await {
        Ok(_) => back_to_grid(),
        Err(e) => {
            tracing::warn!(table_id, error = %e, "Order not placed");
            order_form(&http, table_id, draft, Some(e)).await
        }
    }
}

/// GET /home/waiter/tables/{id}/order - 查看订单
pub async fn view_order(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
) -> Response {
    let http = waiter_client!(state, session);
    match OrderView::load(&http, table_id).await {
        Ok(order) => view::order_detail(&order, None),
        Err(e) => view::order_unavailable(table_id, &e),
    }
}

/// POST /home/waiter/tables/{id}/payment - 结账
pub async fn payment(
    State(state): State<ServerState>,
    session: CurrentSession,
    Path(table_id): Path<u32>,
) -> Response {
    let http = waiter_client!(state, session);
    let mut screen = match WaiterScreen::load(&http).await {
        Ok(screen) => screen,
        Err(e) => return view::tables(&WaiterScreen::default(), Some(&e)),
    };
    match screen.make_payment(&http, table_id).await {
        Ok(()) => back_to_grid(),
        Err(e) => view::tables(&screen, Some(&e)),
    }
}

async fn order_form(
    http: &koala_client::HttpClient,
    table_id: u32,
    draft: OrderDraft,
    error: Option<shared::AppError>,
) -> Response {
    match OrderForm::load(http, table_id, draft).await {
        Ok(form) => view::order_form(&form, error.as_ref()),
        Err(load_error) => {
            let form = OrderForm {
                table_id,
                ..OrderForm::default()
            };
            view::order_form(&form, error.as_ref().or(Some(&load_error)))
        }
    }
}
