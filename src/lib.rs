extern crate dotenv;

pub mod address;
pub mod analyzers;
pub mod config;
pub mod events;
pub mod opensea;
