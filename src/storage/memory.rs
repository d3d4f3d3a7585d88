use std::collections::BTreeMap;

use parking_lot::RwLock;

use super::Storage;
use crate::models::{
    CartItem, NewCartItem, NewOrder, NewOrderItem, NewProduct, NewRegion, NewReview, NewUser,
    Order, OrderItem, Product, ProductUpdate, Region, Review, User, UserUpdate,
};

/// Rows of one entity type keyed by id, plus that type's id sequence.
///
/// Ids start at 1 and are never handed out twice, even after a delete.
/// Iteration is in id order, which is also insertion order.
struct Table<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i32) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn get_mut(&mut self, id: i32) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn remove(&mut self, id: i32) -> bool {
        self.rows.remove(&id).is_some()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.values().find(|row| predicate(row)).cloned()
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }
}

#[derive(Default)]
struct Tables {
    users: Table<User>,
    products: Table<Product>,
    regions: Table<Region>,
    orders: Table<Order>,
    order_items: Table<OrderItem>,
    reviews: Table<Review>,
    cart_items: Table<CartItem>,
}

/// In-memory store. Every call takes the lock exactly once, so individual
/// operations are atomic; sequences of calls are not.
#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.read();
        f.debug_struct("MemStorage")
            .field("users", &tables.users.rows.len())
            .field("products", &tables.products.rows.len())
            .field("regions", &tables.regions.rows.len())
            .field("orders", &tables.orders.rows.len())
            .field("cart_items", &tables.cart_items.rows.len())
            .finish()
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: i32) -> Option<User> {
        self.tables.read().users.get(id)
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.tables
            .read()
            .users
            .find(|user| user.username == username)
    }

    fn create_user(&self, user: NewUser) -> User {
        self.tables
            .write()
            .users
            .insert_with(|id| user.into_user(id))
    }

    fn update_user(&self, id: i32, update: UserUpdate) -> Option<User> {
        let mut tables = self.tables.write();
        let user = tables.users.get_mut(id)?;
        update.apply(user);
        Some(user.clone())
    }

    fn get_artisans(&self) -> Vec<User> {
        self.tables.read().users.filter(|user| user.is_artisan)
    }

    fn get_artisan(&self, id: i32) -> Option<User> {
        self.get_user(id).filter(|user| user.is_artisan)
    }

    fn get_products(&self) -> Vec<Product> {
        self.tables.read().products.all()
    }

    fn get_product(&self, id: i32) -> Option<Product> {
        self.tables.read().products.get(id)
    }

    fn create_product(&self, product: NewProduct) -> Product {
        self.tables
            .write()
            .products
            .insert_with(|id| product.into_product(id))
    }

    fn update_product(&self, id: i32, update: ProductUpdate) -> Option<Product> {
        let mut tables = self.tables.write();
        let product = tables.products.get_mut(id)?;
        update.apply(product);
        Some(product.clone())
    }

    fn delete_product(&self, id: i32) -> bool {
        self.tables.write().products.remove(id)
    }

    fn get_featured_products(&self) -> Vec<Product> {
        self.tables.read().products.filter(|product| product.featured)
    }

    fn get_products_by_category(&self, category: &str) -> Vec<Product> {
        self.tables
            .read()
            .products
            .filter(|product| product.category == category)
    }

    fn get_products_by_region(&self, region: &str) -> Vec<Product> {
        self.tables
            .read()
            .products
            .filter(|product| product.region == region)
    }

    fn get_products_by_artisan(&self, artisan_id: i32) -> Vec<Product> {
        self.tables
            .read()
            .products
            .filter(|product| product.artisan_id == artisan_id)
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        let needle = query.to_lowercase();
        self.tables.read().products.filter(|product| {
            [
                &product.name,
                &product.description,
                &product.category,
                &product.region,
                &product.material,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
        })
    }

    fn get_regions(&self) -> Vec<Region> {
        self.tables.read().regions.all()
    }

    fn get_region(&self, id: i32) -> Option<Region> {
        self.tables.read().regions.get(id)
    }

    fn get_region_by_name(&self, name: &str) -> Option<Region> {
        self.tables.read().regions.find(|region| region.name == name)
    }

    fn create_region(&self, region: NewRegion) -> Region {
        self.tables.write().regions.insert_with(|id| Region {
            id,
            name: region.name,
            description: region.description,
            image_url: region.image_url,
        })
    }

    fn get_orders(&self, user_id: i32) -> Vec<Order> {
        self.tables
            .read()
            .orders
            .filter(|order| order.user_id == user_id)
    }

    fn get_order(&self, id: i32) -> Option<Order> {
        self.tables.read().orders.get(id)
    }

    fn create_order(&self, order: NewOrder) -> Order {
        self.tables.write().orders.insert_with(|id| Order {
            id,
            user_id: order.user_id,
            total_amount: order.total_amount,
            status: order.status,
            created_at: order.created_at,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
        })
    }

    fn update_order_status(&self, id: i32, status: &str) -> Option<Order> {
        let mut tables = self.tables.write();
        let order = tables.orders.get_mut(id)?;
        order.status = status.to_string();
        Some(order.clone())
    }

    fn get_order_items(&self, order_id: i32) -> Vec<OrderItem> {
        self.tables
            .read()
            .order_items
            .filter(|item| item.order_id == order_id)
    }

    fn create_order_item(&self, item: NewOrderItem) -> OrderItem {
        self.tables.write().order_items.insert_with(|id| OrderItem {
            id,
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price: item.price,
        })
    }

    fn get_product_reviews(&self, product_id: i32) -> Vec<Review> {
        self.tables
            .read()
            .reviews
            .filter(|review| review.product_id == product_id)
    }

    fn create_review(&self, review: NewReview) -> Review {
        self.tables.write().reviews.insert_with(|id| Review {
            id,
            user_id: review.user_id,
            product_id: review.product_id,
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        })
    }

    fn get_cart_items(&self, user_id: i32) -> Vec<CartItem> {
        self.tables
            .read()
            .cart_items
            .filter(|item| item.user_id == user_id)
    }

    fn add_to_cart(&self, item: NewCartItem) -> CartItem {
        let mut tables = self.tables.write();
        let existing = tables
            .cart_items
            .rows
            .values_mut()
            .find(|row| row.user_id == item.user_id && row.product_id == item.product_id);

        if let Some(row) = existing {
            row.quantity = row.quantity.saturating_add(item.quantity);
            return row.clone();
        }

        tables.cart_items.insert_with(|id| CartItem {
            id,
            user_id: item.user_id,
            product_id: item.product_id,
            quantity: item.quantity,
        })
    }

    fn update_cart_item(&self, id: i32, quantity: i32) -> Option<CartItem> {
        let mut tables = self.tables.write();
        let item = tables.cart_items.get_mut(id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    fn remove_from_cart(&self, id: i32) -> bool {
        self.tables.write().cart_items.remove(id)
    }

    fn clear_cart(&self, user_id: i32) -> bool {
        self.tables
            .write()
            .cart_items
            .rows
            .retain(|_, item| item.user_id != user_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;

    fn new_user(username: &str, is_artisan: bool) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "secret".into(),
            name: username.to_uppercase(),
            email: format!("{username}@example.com"),
            phone_number: None,
            address: None,
            is_artisan,
            bio: None,
            region: None,
        }
    }

    fn new_product(name: &str, region: &str, material: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            description: "Handmade".into(),
            price: Decimal::new(1250, 0),
            category: "Wooden Toys".into(),
            region: region.to_string(),
            material: material.to_string(),
            image_url: "/img.png".into(),
            artisan_id: 1,
            stock: 5,
            history: None,
            cultural_significance: None,
            featured: false,
        }
    }

    #[test]
    fn ids_increase_and_are_not_reused_after_delete() {
        let store = MemStorage::new();
        let a = store.create_product(new_product("A", "South India", "Wood"));
        let b = store.create_product(new_product("B", "South India", "Wood"));
        assert!(b.id > a.id);

        assert!(store.delete_product(b.id));
        let c = store.create_product(new_product("C", "South India", "Wood"));
        assert!(c.id > b.id);
        assert!(!store.delete_product(b.id));
    }

    #[test]
    fn id_sequences_are_per_entity() {
        let store = MemStorage::new();
        let user = store.create_user(new_user("ramesh", true));
        let product = store.create_product(new_product("Horse", "South India", "Wood"));
        assert_eq!(user.id, 1);
        assert_eq!(product.id, 1);
    }

    #[test]
    fn merged_cart_quantity_saturates() {
        let store = MemStorage::new();
        for _ in 0..2 {
            store.add_to_cart(NewCartItem {
                user_id: 1,
                product_id: 7,
                quantity: i32::MAX,
            });
        }
        assert_eq!(store.get_cart_items(1)[0].quantity, i32::MAX);
    }

    #[test]
    fn add_to_cart_merges_same_user_and_product() {
        let store = MemStorage::new();
        let first = store.add_to_cart(NewCartItem {
            user_id: 1,
            product_id: 7,
            quantity: 2,
        });
        let second = store.add_to_cart(NewCartItem {
            user_id: 1,
            product_id: 7,
            quantity: 3,
        });

        assert_eq!(first.id, second.id);
        assert_eq!(second.quantity, 5);
        assert_eq!(store.get_cart_items(1).len(), 1);

        let other_user = store.add_to_cart(NewCartItem {
            user_id: 2,
            product_id: 7,
            quantity: 1,
        });
        assert_ne!(other_user.id, first.id);
    }

    #[test]
    fn search_matches_any_field_case_insensitively() {
        let store = MemStorage::new();
        store.create_product(new_product("Kathputli Puppet", "North India", "Cloth and Wood"));
        store.create_product(new_product("Clay Doll", "East India", "Clay"));

        assert_eq!(store.search_products("PUPPET").len(), 1);
        assert_eq!(store.search_products("east").len(), 1);
        assert_eq!(store.search_products("wood").len(), 2);
        assert_eq!(store.search_products("cloth").len(), 1);
        assert!(store.search_products("bamboo").is_empty());
    }

    #[test]
    fn artisan_lookups_skip_regular_users() {
        let store = MemStorage::new();
        let artisan = store.create_user(new_user("laxmi", true));
        let buyer = store.create_user(new_user("buyer", false));

        let artisans = store.get_artisans();
        assert_eq!(artisans.len(), 1);
        assert_eq!(artisans[0].id, artisan.id);
        assert!(store.get_artisan(buyer.id).is_none());
        assert!(store.get_artisan(artisan.id).is_some());
    }

    #[test]
    fn region_filter_is_exact_and_case_sensitive() {
        let store = MemStorage::new();
        store.create_product(new_product("Horse", "South India", "Wood"));
        store.create_product(new_product("Rattle", "south india", "Wood"));

        let found = store.get_products_by_region("South India");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Horse");
    }

    #[test]
    fn partial_update_keeps_unset_fields() {
        let store = MemStorage::new();
        let product = store.create_product(new_product("Horse", "South India", "Wood"));

        let updated = store
            .update_product(product.id, ProductUpdate::stock(2))
            .expect("product exists");
        assert_eq!(updated.stock, 2);
        assert_eq!(updated.name, "Horse");
        assert!(store.update_product(99, ProductUpdate::stock(1)).is_none());

        let user = store.create_user(new_user("mohan", false));
        let user = store
            .update_user(
                user.id,
                UserUpdate {
                    bio: Some("Puppeteer".into()),
                    ..UserUpdate::default()
                },
            )
            .expect("user exists");
        assert_eq!(user.bio.as_deref(), Some("Puppeteer"));
        assert_eq!(user.username, "mohan");
    }

    #[test]
    fn clear_cart_only_touches_that_user_and_is_idempotent() {
        let store = MemStorage::new();
        store.add_to_cart(NewCartItem {
            user_id: 1,
            product_id: 1,
            quantity: 1,
        });
        store.add_to_cart(NewCartItem {
            user_id: 2,
            product_id: 1,
            quantity: 1,
        });

        assert!(store.clear_cart(1));
        assert!(store.get_cart_items(1).is_empty());
        assert_eq!(store.get_cart_items(2).len(), 1);
        assert!(store.clear_cart(1));
        assert!(store.clear_cart(42));
    }

    #[test]
    fn creating_an_order_leaves_stock_and_cart_alone() {
        let store = MemStorage::new();
        let product = store.create_product(new_product("Horse", "South India", "Wood"));
        store.add_to_cart(NewCartItem {
            user_id: 1,
            product_id: product.id,
            quantity: 2,
        });

        let order = store.create_order(NewOrder {
            user_id: 1,
            total_amount: Decimal::new(2500, 0),
            status: "pending".into(),
            created_at: Utc::now(),
            shipping_address: "Mysore".into(),
            payment_method: "cod".into(),
        });
        store.create_order_item(NewOrderItem {
            order_id: order.id,
            product_id: product.id,
            quantity: 2,
            price: Decimal::new(1250, 0),
        });

        assert_eq!(store.get_product(product.id).map(|p| p.stock), Some(5));
        assert_eq!(store.get_cart_items(1).len(), 1);
        assert_eq!(store.get_order_items(order.id).len(), 1);

        let shipped = store
            .update_order_status(order.id, "shipped")
            .expect("order exists");
        assert_eq!(shipped.status, "shipped");
    }
}
