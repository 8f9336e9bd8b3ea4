//! RevoStay seller console: a terminal front end over the RevoStay booking API.
//!
//! The backend owns every booking rule. This crate keeps the login session,
//! gates role-specific views, polls a seller's visit requests and relays
//! confirm/reject decisions.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
