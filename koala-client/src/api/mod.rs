//! Backend endpoint groups, one per staff function

mod auth;
mod chef;
mod manager;
mod waiter;

pub use auth::{AuthApi, SignedIn};
pub use chef::ChefApi;
pub use manager::ManagerApi;
pub use waiter::WaiterApi;
