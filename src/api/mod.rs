pub mod client;
pub mod endpoints;
pub mod http;
pub mod models;
pub mod params;
pub mod request;
