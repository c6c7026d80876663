// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod game_service;
pub mod image_service;
pub mod statistics_service;


pub use game_service::GameService;
pub use image_service::ImageService;
pub use statistics_service::StatisticsService;
