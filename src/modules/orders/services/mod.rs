pub mod gateway_trait;
pub mod order_requester;
pub mod razorpay;

pub use gateway_trait::OrderGateway;
pub use order_requester::OrderRequester;
pub use razorpay::RazorpayClient;
