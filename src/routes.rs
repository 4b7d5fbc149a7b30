/// Route definitions.
///
/// Login, registration, and health checks are open; every other route sits
/// behind the bearer-session gate.
use actix_web::web;

use crate::handlers;
use crate::middleware::SessionAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health::health_check))
        .route(
            "/readiness",
            web::get().to(handlers::health::readiness_check),
        )
        .service(
            web::scope("/api/v1")
                .route("/login", web::post().to(handlers::auth::login))
                .route("/register", web::post().to(handlers::users::register))
                .service(
                    web::scope("")
                        .wrap(SessionAuth)
                        .route("/logout", web::post().to(handlers::auth::logout))
                        // Orders
                        .route("/orders", web::post().to(handlers::orders::create_order))
                        .route("/orders", web::get().to(handlers::orders::list_orders))
                        .route(
                            "/orders/{consignment_id}",
                            web::get().to(handlers::orders::get_order),
                        )
                        .route(
                            "/orders/{consignment_id}",
                            web::put().to(handlers::orders::update_order),
                        )
                        .route(
                            "/orders/{consignment_id}/cancel",
                            web::put().to(handlers::orders::cancel_order),
                        )
                        .route(
                            "/orders/{consignment_id}",
                            web::delete().to(handlers::orders::delete_order),
                        )
                        // Cities
                        .route("/cities", web::post().to(handlers::cities::create_city))
                        .route("/cities", web::get().to(handlers::cities::list_cities))
                        .route("/cities/{id}", web::get().to(handlers::cities::get_city))
                        .route("/cities/{id}", web::put().to(handlers::cities::update_city))
                        .route(
                            "/cities/{id}",
                            web::delete().to(handlers::cities::delete_city),
                        )
                        // Zones
                        .route("/zones", web::post().to(handlers::zones::create_zone))
                        .route("/zones", web::get().to(handlers::zones::list_zones))
                        .route("/zones/{id}", web::get().to(handlers::zones::get_zone))
                        .route("/zones/{id}", web::put().to(handlers::zones::update_zone))
                        .route(
                            "/zones/{id}",
                            web::delete().to(handlers::zones::delete_zone),
                        )
                        // Stores
                        .route("/stores", web::post().to(handlers::stores::create_store))
                        .route("/stores", web::get().to(handlers::stores::list_stores))
                        .route("/stores/{id}", web::get().to(handlers::stores::get_store))
                        .route("/stores/{id}", web::put().to(handlers::stores::update_store))
                        .route(
                            "/stores/{id}",
                            web::delete().to(handlers::stores::delete_store),
                        )
                        // Item types
                        .route(
                            "/item-types",
                            web::post().to(handlers::item_types::create_item_type),
                        )
                        .route(
                            "/item-types",
                            web::get().to(handlers::item_types::list_item_types),
                        )
                        .route(
                            "/item-types/{id}",
                            web::get().to(handlers::item_types::get_item_type),
                        )
                        .route(
                            "/item-types/{id}",
                            web::put().to(handlers::item_types::update_item_type),
                        )
                        .route(
                            "/item-types/{id}",
                            web::delete().to(handlers::item_types::delete_item_type),
                        )
                        // Delivery types
                        .route(
                            "/delivery-types",
                            web::post().to(handlers::delivery_types::create_delivery_type),
                        )
                        .route(
                            "/delivery-types",
                            web::get().to(handlers::delivery_types::list_delivery_types),
                        )
                        .route(
                            "/delivery-types/{id}",
                            web::get().to(handlers::delivery_types::get_delivery_type),
                        )
                        .route(
                            "/delivery-types/{id}",
                            web::put().to(handlers::delivery_types::update_delivery_type),
                        )
                        .route(
                            "/delivery-types/{id}",
                            web::delete().to(handlers::delivery_types::delete_delivery_type),
                        )
                        // Users
                        .route("/users", web::get().to(handlers::users::list_users))
                        .route("/users/{id}", web::get().to(handlers::users::get_user))
                        .route("/users/{id}", web::put().to(handlers::users::update_user))
                        .route(
                            "/users/{id}",
                            web::delete().to(handlers::users::delete_user),
                        ),
                ),
        );
}
