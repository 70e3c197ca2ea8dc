//! Fuji weather dapp: configuration and Robonomics client initialization.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod robonomics;

pub use config::schema::DappConfig;
pub use robonomics::{get_robonomics, init_robonomics, RobonomicsClient, RobonomicsContext, RobonomicsError};
