//! In-memory repository fakes shared across integration tests.
//!
//! Each fake implements the corresponding repository trait over a mutex'd
//! Vec so the services can be exercised without a database.
#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use courier_service::db::{
    CityRepository, DeliveryTypeRepository, ItemTypeRepository, OrderRepository,
    SessionRepository, StoreRepository, UserRepository, ZoneRepository,
};
use courier_service::error::{AppError, Result};
use courier_service::models::order::{NewOrder, Order, OrderListFilter, OrderStatus};
use courier_service::models::session::{NewSession, UserSession};
use courier_service::models::{City, DeliveryType, ItemType, Store, User, Zone};

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryOrderRepository {
    orders: Mutex<Vec<Order>>,
    next_id: AtomicI64,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct row access for assertions.
    pub fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order> {
        let mut orders = self.orders.lock().unwrap();

        if orders
            .iter()
            .any(|o| o.consignment_id == new_order.consignment_id)
        {
            return Err(AppError::Conflict(
                "duplicate consignment ID".to_string(),
            ));
        }

        let now = Utc::now();
        let order = Order {
            id: next(&self.next_id),
            consignment_id: new_order.consignment_id,
            user_id: new_order.user_id,
            store_id: new_order.store_id,
            merchant_order_id: new_order.merchant_order_id,
            recipient_name: new_order.recipient_name,
            recipient_phone: new_order.recipient_phone,
            recipient_address: new_order.recipient_address,
            recipient_city: new_order.recipient_city,
            recipient_zone: new_order.recipient_zone,
            recipient_area: new_order.recipient_area,
            order_type: new_order.order_type,
            delivery_type_id: new_order.delivery_type_id,
            item_type: new_order.item_type,
            item_quantity: new_order.item_quantity,
            item_weight: new_order.item_weight,
            item_description: new_order.item_description,
            special_instruction: new_order.special_instruction,
            order_amount: new_order.order_amount,
            amount_to_collect: new_order.amount_to_collect,
            delivery_fee: new_order.delivery_fee,
            cod_fee: new_order.cod_fee,
            promo_discount: new_order.promo_discount,
            discount: new_order.discount,
            total_fee: new_order.total_fee,
            order_status: new_order.order_status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        orders.push(order.clone());
        Ok(order)
    }

    async fn find_by_consignment_id(&self, consignment_id: &str) -> Result<Option<Order>> {
        let orders = self.orders.lock().unwrap();
        Ok(orders
            .iter()
            .find(|o| o.consignment_id == consignment_id && o.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, filter: &OrderListFilter) -> Result<(Vec<Order>, i64)> {
        let orders = self.orders.lock().unwrap();

        let mut matching: Vec<Order> = orders
            .iter()
            .filter(|o| o.deleted_at.is_none() && o.user_id == filter.user_id)
            .filter(|o| {
                filter
                    .order_status
                    .map_or(true, |status| o.order_status == status)
            })
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        let total = matching.len() as i64;
        let offset = ((filter.page - 1) * filter.per_page) as usize;
        let page: Vec<Order> = matching
            .into_iter()
            .skip(offset)
            .take(filter.per_page as usize)
            .collect();

        Ok((page, total))
    }

    async fn update(&self, updated: &Order) -> Result<u64> {
        let mut orders = self.orders.lock().unwrap();
        match orders
            .iter_mut()
            .find(|o| o.id == updated.id && o.deleted_at.is_none())
        {
            Some(order) => {
                let mut next = updated.clone();
                next.updated_at = Utc::now();
                *order = next;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update_status(&self, id: i64, status: OrderStatus) -> Result<u64> {
        let mut orders = self.orders.lock().unwrap();
        match orders
            .iter_mut()
            .find(|o| o.id == id && o.deleted_at.is_none())
        {
            Some(order) => {
                order.order_status = status;
                order.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut orders = self.orders.lock().unwrap();
        match orders
            .iter_mut()
            .find(|o| o.id == id && o.deleted_at.is_none())
        {
            Some(order) => {
                order.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryStoreRepository {
    stores: Mutex<Vec<Store>>,
    next_id: AtomicI64,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str, contact_phone: &str) -> Store {
        let now = Utc::now();
        let store = Store {
            id: next(&self.next_id),
            name: name.to_string(),
            contact_phone: contact_phone.to_string(),
            address: String::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.stores.lock().unwrap().push(store.clone());
        store
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn create(&self, name: &str, contact_phone: &str, address: &str) -> Result<Store> {
        let now = Utc::now();
        let store = Store {
            id: next(&self.next_id),
            name: name.to_string(),
            contact_phone: contact_phone.to_string(),
            address: address.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.stores.lock().unwrap().push(store.clone());
        Ok(store)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Store>> {
        let stores = self.stores.lock().unwrap();
        Ok(stores
            .iter()
            .find(|s| s.id == id && s.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Store>> {
        let stores = self.stores.lock().unwrap();
        Ok(stores
            .iter()
            .find(|s| s.name == name && s.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Store>> {
        let stores = self.stores.lock().unwrap();
        Ok(stores
            .iter()
            .filter(|s| s.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, updated: &Store) -> Result<u64> {
        let mut stores = self.stores.lock().unwrap();
        match stores
            .iter_mut()
            .find(|s| s.id == updated.id && s.deleted_at.is_none())
        {
            Some(store) => {
                *store = updated.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut stores = self.stores.lock().unwrap();
        match stores
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
        {
            Some(store) => {
                store.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Cities
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryCityRepository {
    cities: Mutex<Vec<City>>,
    next_id: AtomicI64,
}

impl InMemoryCityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, name: &str, base_delivery_fee: f64) -> City {
        let now = Utc::now();
        let city = City {
            id: next(&self.next_id),
            name: name.to_string(),
            base_delivery_fee,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.cities.lock().unwrap().push(city.clone());
        city
    }
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn create(&self, name: &str, base_delivery_fee: f64) -> Result<City> {
        Ok(self.seed(name, base_delivery_fee))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<City>> {
        let cities = self.cities.lock().unwrap();
        Ok(cities
            .iter()
            .find(|c| c.id == id && c.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<City>> {
        let cities = self.cities.lock().unwrap();
        Ok(cities
            .iter()
            .find(|c| c.name == name && c.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<City>> {
        let cities = self.cities.lock().unwrap();
        Ok(cities
            .iter()
            .filter(|c| c.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, updated: &City) -> Result<u64> {
        let mut cities = self.cities.lock().unwrap();
        match cities
            .iter_mut()
            .find(|c| c.id == updated.id && c.deleted_at.is_none())
        {
            Some(city) => {
                *city = updated.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut cities = self.cities.lock().unwrap();
        match cities
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        {
            Some(city) => {
                city.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// City repository whose lookups always fail, for exercising the delivery-fee
/// fallback path.
pub struct FailingCityRepository;

#[async_trait]
impl CityRepository for FailingCityRepository {
    async fn create(&self, _name: &str, _base_delivery_fee: f64) -> Result<City> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<City>> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<City>> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }

    async fn list(&self, _limit: i64, _offset: i64) -> Result<Vec<City>> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }

    async fn update(&self, _city: &City) -> Result<u64> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }

    async fn delete(&self, _id: i64) -> Result<u64> {
        Err(AppError::Internal("city store unavailable".to_string()))
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, email: &str, password_hash: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: next(&self.next_id),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        let exists = {
            let users = self.users.lock().unwrap();
            users
                .iter()
                .any(|u| u.email == email && u.deleted_at.is_none())
        };
        if exists {
            return Err(AppError::Conflict("duplicate email".to_string()));
        }
        Ok(self.seed(email, password_hash))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.id == id && u.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.email == email && u.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| u.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update_email(&self, id: i64, email: &str) -> Result<u64> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.email = email.to_string();
                user.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        {
            Some(user) => {
                user.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: Mutex<Vec<UserSession>>,
    next_id: AtomicI64,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, new_session: NewSession) -> Result<UserSession> {
        let now = Utc::now();
        let session = UserSession {
            id: next(&self.next_id),
            user_id: new_session.user_id,
            access_token: new_session.access_token,
            refresh_token: new_session.refresh_token,
            expires_at: new_session.expires_at,
            created_at: now,
            updated_at: now,
        };
        self.sessions.lock().unwrap().push(session.clone());
        Ok(session)
    }

    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<UserSession>> {
        let sessions = self.sessions.lock().unwrap();
        Ok(sessions
            .iter()
            .find(|s| s.access_token == access_token)
            .cloned())
    }

    async fn delete_by_access_token(&self, access_token: &str) -> Result<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.access_token != access_token);
        Ok((before - sessions.len()) as u64)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64> {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();
        sessions.retain(|s| s.expires_at > now);
        Ok((before - sessions.len()) as u64)
    }
}

// ---------------------------------------------------------------------------
// Zones / item types / delivery types
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct InMemoryZoneRepository {
    zones: Mutex<Vec<Zone>>,
    next_id: AtomicI64,
}

impl InMemoryZoneRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ZoneRepository for InMemoryZoneRepository {
    async fn create(&self, city_id: i64, name: &str) -> Result<Zone> {
        let now = Utc::now();
        let zone = Zone {
            id: next(&self.next_id),
            city_id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.zones.lock().unwrap().push(zone.clone());
        Ok(zone)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Zone>> {
        let zones = self.zones.lock().unwrap();
        Ok(zones
            .iter()
            .find(|z| z.id == id && z.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_name_in_city(&self, city_id: i64, name: &str) -> Result<Option<Zone>> {
        let zones = self.zones.lock().unwrap();
        Ok(zones
            .iter()
            .find(|z| z.city_id == city_id && z.name == name && z.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Zone>> {
        let zones = self.zones.lock().unwrap();
        Ok(zones
            .iter()
            .filter(|z| z.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_by_city(&self, city_id: i64, limit: i64, offset: i64) -> Result<Vec<Zone>> {
        let zones = self.zones.lock().unwrap();
        Ok(zones
            .iter()
            .filter(|z| z.city_id == city_id && z.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, updated: &Zone) -> Result<u64> {
        let mut zones = self.zones.lock().unwrap();
        match zones
            .iter_mut()
            .find(|z| z.id == updated.id && z.deleted_at.is_none())
        {
            Some(zone) => {
                *zone = updated.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut zones = self.zones.lock().unwrap();
        match zones
            .iter_mut()
            .find(|z| z.id == id && z.deleted_at.is_none())
        {
            Some(zone) => {
                zone.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Default)]
pub struct InMemoryItemTypeRepository {
    item_types: Mutex<Vec<ItemType>>,
    next_id: AtomicI64,
}

impl InMemoryItemTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemTypeRepository for InMemoryItemTypeRepository {
    async fn create(&self, name: &str) -> Result<ItemType> {
        let now = Utc::now();
        let item_type = ItemType {
            id: next(&self.next_id),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.item_types.lock().unwrap().push(item_type.clone());
        Ok(item_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ItemType>> {
        let item_types = self.item_types.lock().unwrap();
        Ok(item_types
            .iter()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ItemType>> {
        let item_types = self.item_types.lock().unwrap();
        Ok(item_types
            .iter()
            .find(|t| t.name == name && t.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<ItemType>> {
        let item_types = self.item_types.lock().unwrap();
        Ok(item_types
            .iter()
            .filter(|t| t.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, name: &str) -> Result<u64> {
        let mut item_types = self.item_types.lock().unwrap();
        match item_types
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
        {
            Some(item_type) => {
                item_type.name = name.to_string();
                item_type.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut item_types = self.item_types.lock().unwrap();
        match item_types
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
        {
            Some(item_type) => {
                item_type.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[derive(Default)]
pub struct InMemoryDeliveryTypeRepository {
    delivery_types: Mutex<Vec<DeliveryType>>,
    next_id: AtomicI64,
}

impl InMemoryDeliveryTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DeliveryTypeRepository for InMemoryDeliveryTypeRepository {
    async fn create(&self, name: &str) -> Result<DeliveryType> {
        let now = Utc::now();
        let delivery_type = DeliveryType {
            id: next(&self.next_id),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.delivery_types
            .lock()
            .unwrap()
            .push(delivery_type.clone());
        Ok(delivery_type)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DeliveryType>> {
        let delivery_types = self.delivery_types.lock().unwrap();
        Ok(delivery_types
            .iter()
            .find(|t| t.id == id && t.deleted_at.is_none())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<DeliveryType>> {
        let delivery_types = self.delivery_types.lock().unwrap();
        Ok(delivery_types
            .iter()
            .find(|t| t.name == name && t.deleted_at.is_none())
            .cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<DeliveryType>> {
        let delivery_types = self.delivery_types.lock().unwrap();
        Ok(delivery_types
            .iter()
            .filter(|t| t.deleted_at.is_none())
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, name: &str) -> Result<u64> {
        let mut delivery_types = self.delivery_types.lock().unwrap();
        match delivery_types
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
        {
            Some(delivery_type) => {
                delivery_type.name = name.to_string();
                delivery_type.updated_at = Utc::now();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64> {
        let mut delivery_types = self.delivery_types.lock().unwrap();
        match delivery_types
            .iter_mut()
            .find(|t| t.id == id && t.deleted_at.is_none())
        {
            Some(delivery_type) => {
                delivery_type.deleted_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

// ---------------------------------------------------------------------------
// Wiring helpers
// ---------------------------------------------------------------------------

pub struct TestOrderEnv {
    pub orders: Arc<InMemoryOrderRepository>,
    pub stores: Arc<InMemoryStoreRepository>,
    pub cities: Arc<InMemoryCityRepository>,
    pub service: courier_service::services::OrderService,
}

/// Order service over fresh in-memory repositories.
pub fn order_env() -> TestOrderEnv {
    let orders = Arc::new(InMemoryOrderRepository::new());
    let stores = Arc::new(InMemoryStoreRepository::new());
    let cities = Arc::new(InMemoryCityRepository::new());

    let service = courier_service::services::OrderService::new(
        orders.clone(),
        stores.clone(),
        cities.clone(),
    );

    TestOrderEnv {
        orders,
        stores,
        cities,
        service,
    }
}
