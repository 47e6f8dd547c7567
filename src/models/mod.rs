pub mod user;
pub mod auth;
pub mod product;
pub mod cart;
pub mod order;
pub mod review;

pub use user::{UserProfile, UserRole, ProfileUpdate};
pub use auth::{TokenResponse, SignupRequest};
pub use product::{Product, ProductInput};
pub use cart::{Cart, CartItem, AddToCartRequest};
pub use order::{Order, OrderItem};
pub use review::{Review, ReviewInput};
