// Game flow over the persistence gateway

pub mod service;

pub use service::GameService;
