//! Input handling for job-description and resume files

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use manager::InputManager;
