//! HTTP route handlers for the GadgetzWorld API.
//!
//! # Route Structure
//!
//! ```text
//! # Session
//! POST   /jwt                        - Issue token cookie for an email
//! GET    /logout                     - Clear the token cookie
//!
//! # Users
//! POST   /users/{email}              - Create account if absent
//! GET    /users/role/{email}         - Look up an account's role
//!
//! # Products
//! POST   /products                   - Add a product (auth)
//! GET    /products                   - List products (?category=&seller=)
//! GET    /product/{id}               - Product detail
//! PATCH  /product/{id}               - Partial update (auth)
//! DELETE /product/{id}               - Remove a product (auth)
//!
//! # Wishlist
//! POST   /wishlist                   - Save a product snapshot
//! GET    /wishlist?email=            - List a user's wishlist
//! DELETE /wishlist                   - Remove by {productId, email}
//!
//! # Carts
//! POST   /carts                      - Add a cart line
//! GET    /carts?email=               - List a user's cart
//! PATCH  /carts/{id}                 - Update line quantity
//! DELETE /carts/{id}                 - Remove a cart line
//!
//! # Orders
//! POST   /orders                     - Place an order (auth)
//! GET    /orders                     - All orders (auth)
//! GET    /orders/{id}                - Order detail (auth)
//! DELETE /orders/{id}                - Cancel unless delivered (auth)
//! PATCH  /update-order-status/{id}   - Set order status (auth)
//! GET    /customer-orders/{email}    - One customer's orders (auth)
//!
//! # Statistics
//! GET    /admin-stat                 - 30-day totals and daily series (auth)
//!
//! # Content
//! GET    /banners                    - List banners
//! POST   /banners                    - Add a banner (auth)
//! DELETE /banners/{id}               - Remove a banner (auth)
//! GET    /marquee                    - List marquee entries
//! POST   /marquee                    - Add a marquee entry (auth)
//! DELETE /marquee/{id}               - Remove a marquee entry (auth)
//! ```

pub mod auth;
pub mod carts;
pub mod content;
pub mod orders;
pub mod products;
pub mod stats;
pub mod users;
pub mod wishlist;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::state::AppState;

/// Create all routes for the API.
///
/// The route table is deliberately flat: each verb/path pair maps to exactly
/// one repository call, the contract the frontends were written against.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Session
        .route("/jwt", post(auth::issue_token))
        .route("/logout", get(auth::logout))
        // Users
        .route("/users/{email}", post(users::create_if_absent))
        .route("/users/role/{email}", get(users::get_role))
        // Products
        .route("/products", post(products::create).get(products::list))
        .route(
            "/product/{id}",
            get(products::show)
                .patch(products::update)
                .delete(products::remove),
        )
        // Wishlist
        .route(
            "/wishlist",
            post(wishlist::add).get(wishlist::list).delete(wishlist::remove),
        )
        // Carts
        .route("/carts", post(carts::add).get(carts::list))
        .route(
            "/carts/{id}",
            patch(carts::update_quantity).delete(carts::remove),
        )
        // Orders
        .route("/orders", post(orders::create).get(orders::list))
        .route("/orders/{id}", get(orders::show).delete(orders::cancel))
        .route("/update-order-status/{id}", patch(orders::update_status))
        .route("/customer-orders/{email}", get(orders::customer_orders))
        // Statistics
        .route("/admin-stat", get(stats::admin_stat))
        // Content
        .route("/banners", get(content::list_banners).post(content::create_banner))
        .route("/banners/{id}", delete(content::remove_banner))
        .route("/marquee", get(content::list_marquee).post(content::create_marquee))
        .route("/marquee/{id}", delete(content::remove_marquee))
}
