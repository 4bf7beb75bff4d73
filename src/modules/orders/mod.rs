pub mod models;
pub mod services;

pub use models::{Order, OrderRequest, OrderStatus};
pub use services::{OrderGateway, OrderRequester, RazorpayClient};
