pub mod app;
pub mod cart_view;
pub mod catalog;
pub mod dashboard;
pub mod login_screen;
pub mod navbar;
pub mod orders_view;
pub mod product_card;
pub mod profile_view;
pub mod signup_screen;

pub use app::{App, View};
pub use cart_view::CartView;
pub use catalog::Catalog;
pub use dashboard::Dashboard;
pub use login_screen::LoginScreen;
pub use navbar::Navbar;
pub use orders_view::OrdersView;
pub use product_card::ProductCard;
pub use profile_view::ProfileView;
pub use signup_screen::SignupScreen;
