pub mod app_state;
pub mod cart;
pub mod orders;
