//! Entity storage.
//!
//! Services only talk to the [`Storage`] trait; [`MemStorage`] is the single
//! in-process implementation. Lookups report absence as `None`/`false` and
//! leave it to the caller to decide whether that is an error.

mod memory;

pub use memory::MemStorage;

use crate::models::{
    CartItem, NewCartItem, NewOrder, NewOrderItem, NewProduct, NewRegion, NewReview, NewUser,
    Order, OrderItem, Product, ProductUpdate, Region, Review, User, UserUpdate,
};

pub trait Storage: Send + Sync {
    // Users
    fn get_user(&self, id: i32) -> Option<User>;
    fn get_user_by_username(&self, username: &str) -> Option<User>;
    fn create_user(&self, user: NewUser) -> User;
    fn update_user(&self, id: i32, update: UserUpdate) -> Option<User>;
    fn get_artisans(&self) -> Vec<User>;
    /// `None` when the user is unknown or is not an artisan.
    fn get_artisan(&self, id: i32) -> Option<User>;

    // Products
    fn get_products(&self) -> Vec<Product>;
    fn get_product(&self, id: i32) -> Option<Product>;
    fn create_product(&self, product: NewProduct) -> Product;
    fn update_product(&self, id: i32, update: ProductUpdate) -> Option<Product>;
    fn delete_product(&self, id: i32) -> bool;
    fn get_featured_products(&self) -> Vec<Product>;
    fn get_products_by_category(&self, category: &str) -> Vec<Product>;
    fn get_products_by_region(&self, region: &str) -> Vec<Product>;
    fn get_products_by_artisan(&self, artisan_id: i32) -> Vec<Product>;
    /// Case-insensitive substring match on name, description, category,
    /// region or material.
    fn search_products(&self, query: &str) -> Vec<Product>;

    // Regions
    fn get_regions(&self) -> Vec<Region>;
    fn get_region(&self, id: i32) -> Option<Region>;
    fn get_region_by_name(&self, name: &str) -> Option<Region>;
    fn create_region(&self, region: NewRegion) -> Region;

    // Orders
    fn get_orders(&self, user_id: i32) -> Vec<Order>;
    fn get_order(&self, id: i32) -> Option<Order>;
    fn create_order(&self, order: NewOrder) -> Order;
    fn update_order_status(&self, id: i32, status: &str) -> Option<Order>;

    // Order items
    fn get_order_items(&self, order_id: i32) -> Vec<OrderItem>;
    fn create_order_item(&self, item: NewOrderItem) -> OrderItem;

    // Reviews
    fn get_product_reviews(&self, product_id: i32) -> Vec<Review>;
    fn create_review(&self, review: NewReview) -> Review;

    // Cart
    fn get_cart_items(&self, user_id: i32) -> Vec<CartItem>;
    /// Upsert-merge: an existing row for the same (user, product) pair has the
    /// requested quantity added to it (saturating at `i32::MAX`) instead of a
    /// second row being created.
    fn add_to_cart(&self, item: NewCartItem) -> CartItem;
    fn update_cart_item(&self, id: i32, quantity: i32) -> Option<CartItem>;
    fn remove_from_cart(&self, id: i32) -> bool;
    /// Always succeeds, including for an empty cart.
    fn clear_cart(&self, user_id: i32) -> bool;
}
