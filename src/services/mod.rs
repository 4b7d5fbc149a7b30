pub mod auth;
pub mod cities;
pub mod delivery_types;
pub mod item_types;
pub mod orders;
pub mod sessions;
pub mod stores;
pub mod users;
pub mod zones;

pub use auth::AuthService;
pub use cities::CityService;
pub use delivery_types::DeliveryTypeService;
pub use item_types::ItemTypeService;
pub use orders::OrderService;
pub use sessions::SessionService;
pub use stores::StoreService;
pub use users::UserService;
pub use zones::ZoneService;
