pub mod cart_service;
pub mod order_service;
pub mod product_service;
pub mod region_service;
pub mod review_service;
pub mod user_service;
