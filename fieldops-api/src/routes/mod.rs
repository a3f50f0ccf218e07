/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: service info and health check
/// - `auth`: registration, login, logout
/// - `dashboard`: role-specific dashboard data
/// - `bookings`: client service bookings
/// - `receipts`: client receipt uploads
/// - `tasks`: admin task assignment

pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod health;
pub mod receipts;
pub mod tasks;
