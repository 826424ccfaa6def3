pub mod admin_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod payment_controller;
pub mod user_controller;
pub mod vehicle_controller;
pub mod wishlist_controller;
