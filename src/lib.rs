//! HTTP API for a marketplace of handcrafted regional toys: catalogue,
//! artisans, regions, carts, orders and reviews over an in-memory store.

pub mod config;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
