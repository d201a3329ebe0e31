//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL (ver schema.sql en la raíz del repositorio).

pub mod branch;
pub mod car;
pub mod customer;
pub mod exchange;
pub mod payment;
pub mod rental;
pub mod transaction;
