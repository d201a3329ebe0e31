//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla, cada uno con su PgPool. Las mutaciones que
//! tocan dos tablas (reserva + estado del coche, método de pago por
//! defecto) se ejecutan dentro de una transacción.

pub mod branch_repository;
pub mod car_repository;
pub mod customer_repository;
pub mod payment_repository;
pub mod rental_repository;
pub mod transaction_repository;
