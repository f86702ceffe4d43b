//! Resource operations, one module per REST resource.

mod auth;
mod category;
mod inbox;
mod logbook;
mod organization;
mod outbox;
mod stats;
mod user;
