pub mod config;
pub mod constants;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
pub mod validators;
pub mod web;
