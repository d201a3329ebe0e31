pub mod branch_routes;
pub mod car_routes;
pub mod customer_routes;
pub mod dashboard_routes;
pub mod exchange_routes;
pub mod payment_routes;
pub mod rental_routes;
pub mod transaction_routes;
