pub mod auth;
pub mod cities;
pub mod delivery_types;
pub mod health;
pub mod item_types;
pub mod orders;
pub mod stores;
pub mod users;
pub mod zones;
