pub mod city;
pub mod delivery_type;
pub mod item_type;
pub mod order;
pub mod pagination;
pub mod session;
pub mod store;
pub mod user;
pub mod zone;

pub use city::City;
pub use delivery_type::DeliveryType;
pub use item_type::ItemType;
pub use order::{Order, OrderStatus, OrderType};
pub use pagination::Pagination;
pub use session::UserSession;
pub use store::Store;
pub use user::User;
pub use zone::Zone;
