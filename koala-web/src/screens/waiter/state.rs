//! Waiter screen state

use std::collections::HashMap;

use koala_client::HttpClient;
use shared::models::{MenuItem, Order, OrderDetail, OrderDraft, Table, TableStatus};
use shared::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

/// Tables per grid row
pub const GRID_COLUMNS: usize = 5;

/// Form field prefix carrying a draft quantity: `qty_<menu_item_id>`
pub const QUANTITY_FIELD: &str = "qty_";

/// Lay items out in rows of `columns`; the last row is padded with `None`
pub fn grid<T>(items: &[T], columns: usize) -> Vec<Vec<Option<&T>>> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .map(|chunk| {
            let mut row: Vec<Option<&T>> = chunk.iter().map(Some).collect();
            row.resize(columns, None);
            row
        })
        .collect()
}

/// Table grid with local status updates
#[derive(Debug, Default)]
pub struct WaiterScreen {
    pub tables: Vec<Table>,
}

impl WaiterScreen {
    pub async fn load(http: &HttpClient) -> AppResult<Self> {
        let tables = http.waiter().tables().await?;
        Ok(Self { tables })
    }

    pub fn rows(&self) -> Vec<Vec<Option<&Table>>> {
        grid(&self.tables, GRID_COLUMNS)
    }

    /// Apply a status locally; false if the table is not on screen
    pub fn set_status(&mut self, table_id: u32, status: TableStatus) -> bool {
        match self.tables.iter_mut().find(|t| t.table_id == table_id) {
            Some(table) => {
                table.table_status = status;
                true
            }
            None => false,
        }
    }

    /// Check a vacant table in and mark it reserved without re-fetching
    pub async fn check_in(&mut self, http: &HttpClient, table_id: u32) -> AppResult<()> {
        let table = http.waiter().reserve_table(table_id).await?;
        self.set_status(table_id, table.table_status);
        tracing::info!(table_id, "Table checked in");
        Ok(())
    }

    /// Submit an order; the table switches to eating on success
    pub async fn submit_order(
        &mut self,
        http: &HttpClient,
        table_id: u32,
        draft: &OrderDraft,
    ) -> AppResult<Order> {
        if !draft.has_selected_items() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        let order = http.waiter().create_order(table_id, draft).await?;
        self.set_status(table_id, TableStatus::Eating);
        tracing::info!(table_id, order_id = %order.order_id, "Order placed");
        Ok(order)
    }

    /// Settle the table's orders; the table becomes vacant
    pub async fn make_payment(&mut self, http: &HttpClient, table_id: u32) -> AppResult<()> {
        let served = http.waiter().serve_order(table_id).await?;
        self.set_status(table_id, TableStatus::Vacant);
        tracing::info!(table_id, orders = served.len(), "Payment taken");
        Ok(())
    }
}

/// Menu with the quantities picked so far for one table
#[derive(Debug, Default)]
pub struct OrderForm {
    pub table_id: u32,
    pub menu: Vec<MenuItem>,
    pub draft: OrderDraft,
}

impl OrderForm {
    pub async fn load(http: &HttpClient, table_id: u32, draft: OrderDraft) -> AppResult<Self> {
        let menu = http.waiter().menu_items().await?;
        Ok(Self {
            table_id,
            menu,
            draft,
        })
    }

    /// Sum of price × quantity over the current draft
    pub fn draft_total(&self) -> rust_decimal::Decimal {
        self.menu
            .iter()
            .map(|item| item.price * rust_decimal::Decimal::from(self.draft.quantity(&item.menu_item_id)))
            .sum()
    }
}

/// Quantity picker action posted with the form: `inc:<id>` or `dec:<id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftOp {
    Increment(Uuid),
    Decrement(Uuid),
}

impl DraftOp {
    pub fn parse(raw: &str) -> Option<Self> {
        let (op, id) = raw.split_once(':')?;
        let id = id.parse().ok()?;
        match op {
            "inc" => Some(Self::Increment(id)),
            "dec" => Some(Self::Decrement(id)),
            _ => None,
        }
    }

    pub fn apply(self, draft: &mut OrderDraft) {
        match self {
            Self::Increment(id) => draft.increment(id),
            Self::Decrement(id) => draft.decrement(id),
        }
    }
}

/// Rebuild a draft from submitted form fields
///
/// Unparseable quantities count as zero.
pub fn draft_from_fields(fields: &HashMap<String, String>) -> OrderDraft {
    let mut draft = OrderDraft::new();
    for (key, value) in fields {
        if let Some(id) = key.strip_prefix(QUANTITY_FIELD)
            && let Ok(id) = id.parse::<Uuid>()
        {
            draft.set_quantity(id, value.trim().parse().unwrap_or(0));
        }
    }
    if let Some(op) = fields.get("op").and_then(|raw| DraftOp::parse(raw)) {
        op.apply(&mut draft);
    }
    draft
}

/// Order placed at a table, as shown on the view-order page
#[derive(Debug)]
pub struct OrderView {
    pub table_id: u32,
    pub order: OrderDetail,
}

impl OrderView {
    pub async fn load(http: &HttpClient, table_id: u32) -> AppResult<Self> {
        let order = http.waiter().table_order(table_id).await?;
        Ok(Self { table_id, order })
    }
}
