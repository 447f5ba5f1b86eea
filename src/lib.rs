pub mod app;
pub mod db;
pub mod errors;
pub mod logging;
pub mod models;
pub mod routes;
pub mod state;
