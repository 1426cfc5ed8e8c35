//! Domain types and request/response payloads.
//!
//! Wire names stay camelCase (`productName`, `totalPrice`, `userEmail`) so
//! the existing frontends keep working against this server unchanged.

pub mod cart;
pub mod content;
pub mod order;
pub mod product;
pub mod user;
pub mod wishlist;

pub use cart::{CartItem, NewCartItem, QuantityUpdate};
pub use content::{Banner, MarqueeItem, NewBanner, NewMarqueeItem};
pub use order::{NewOrder, Order, StatusUpdate};
pub use product::{NewProduct, Product, ProductPatch};
pub use user::{CurrentUser, NewUser, RoleResponse, User};
pub use wishlist::{NewWishlistItem, WishlistItem, WishlistRemoval};
