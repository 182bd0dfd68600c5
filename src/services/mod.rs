pub mod error;
pub mod music_service;
