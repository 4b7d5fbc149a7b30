/// Shared application state: one instance of each service, wired once at
/// startup and cloned into every worker.
use std::sync::Arc;

use crate::config::JwtConfig;
use crate::db::{
    DbPools, PgCityRepository, PgDeliveryTypeRepository, PgItemTypeRepository, PgOrderRepository,
    PgSessionRepository, PgStoreRepository, PgUserRepository, PgZoneRepository,
};
use crate::services::{
    AuthService, CityService, DeliveryTypeService, ItemTypeService, OrderService, SessionService,
    StoreService, UserService, ZoneService,
};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionService>,
    pub orders: Arc<OrderService>,
    pub users: Arc<UserService>,
    pub cities: Arc<CityService>,
    pub zones: Arc<ZoneService>,
    pub stores: Arc<StoreService>,
    pub item_types: Arc<ItemTypeService>,
    pub delivery_types: Arc<DeliveryTypeService>,
}

impl AppState {
    /// Wire Postgres-backed repositories into services.
    pub fn build(pools: DbPools, jwt_config: &JwtConfig) -> Self {
        let order_repo = Arc::new(PgOrderRepository::new(pools.clone()));
        let user_repo = Arc::new(PgUserRepository::new(pools.clone()));
        let session_repo = Arc::new(PgSessionRepository::new(pools.clone()));
        let city_repo = Arc::new(PgCityRepository::new(pools.clone()));
        let zone_repo = Arc::new(PgZoneRepository::new(pools.clone()));
        let store_repo = Arc::new(PgStoreRepository::new(pools.clone()));
        let item_type_repo = Arc::new(PgItemTypeRepository::new(pools.clone()));
        let delivery_type_repo = Arc::new(PgDeliveryTypeRepository::new(pools));

        let sessions = Arc::new(SessionService::new(session_repo, jwt_config));

        Self {
            auth: Arc::new(AuthService::new(user_repo.clone(), sessions.clone())),
            sessions,
            orders: Arc::new(OrderService::new(
                order_repo,
                store_repo.clone(),
                city_repo.clone(),
            )),
            users: Arc::new(UserService::new(user_repo)),
            cities: Arc::new(CityService::new(city_repo.clone())),
            zones: Arc::new(ZoneService::new(zone_repo, city_repo)),
            stores: Arc::new(StoreService::new(store_repo)),
            item_types: Arc::new(ItemTypeService::new(item_type_repo)),
            delivery_types: Arc::new(DeliveryTypeService::new(delivery_type_repo)),
        }
    }
}
