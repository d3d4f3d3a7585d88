use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartItemWithProduct, UpdateCartItemRequest},
        orders::{
            CreateOrderRequest, OrderItemRequest, OrderItemWithProduct, OrderWithItems,
            PlaceOrderRequest, PlacedOrder, UpdateOrderStatusRequest,
        },
        products::{CreateProductRequest, UpdateProductRequest},
        regions::{CreateRegionRequest, RegionDetail},
        reviews::{CreateReviewRequest, ReviewWithAuthor},
        users::{ArtisanDetail, CreateUserRequest, UpdateUserRequest},
    },
    error::{ErrorBody, FieldError},
    models::{CartItem, Order, OrderItem, Product, PublicUser, Region, Review, ReviewAuthor},
    response::MessageResponse,
    routes::{
        artisans, cart, health, orders, products as product_routes, regions, reviews, users,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::get_user,
        users::create_user,
        users::update_user,
        artisans::list_artisans,
        artisans::get_artisan,
        product_routes::list_products,
        product_routes::list_featured,
        product_routes::list_by_category,
        product_routes::list_by_region,
        product_routes::search_products,
        product_routes::get_product,
        product_routes::create_product,
        product_routes::update_product,
        product_routes::delete_product,
        regions::list_regions,
        regions::get_region,
        regions::create_region,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::place_order,
        orders::list_user_orders,
        orders::get_order,
        orders::update_order_status,
        reviews::list_product_reviews,
        reviews::create_review
    ),
    components(
        schemas(
            PublicUser,
            ReviewAuthor,
            Product,
            Region,
            Order,
            OrderItem,
            Review,
            CartItem,
            CreateUserRequest,
            UpdateUserRequest,
            ArtisanDetail,
            CreateProductRequest,
            UpdateProductRequest,
            CreateRegionRequest,
            RegionDetail,
            AddToCartRequest,
            UpdateCartItemRequest,
            CartItemWithProduct,
            PlaceOrderRequest,
            CreateOrderRequest,
            OrderItemRequest,
            UpdateOrderStatusRequest,
            PlacedOrder,
            OrderItemWithProduct,
            OrderWithItems,
            CreateReviewRequest,
            ReviewWithAuthor,
            FieldError,
            ErrorBody,
            MessageResponse
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Artisans", description = "Artisan endpoints"),
        (name = "Products", description = "Product catalogue endpoints"),
        (name = "Regions", description = "Region endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Reviews", description = "Review endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
