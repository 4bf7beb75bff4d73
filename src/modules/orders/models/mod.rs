pub mod order;
pub mod order_request;

pub use order::{Order, OrderStatus};
pub use order_request::OrderRequest;
