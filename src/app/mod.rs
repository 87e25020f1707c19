//! Application services

pub mod rental_service;

pub use rental_service::RentalService;
