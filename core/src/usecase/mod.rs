pub mod export;
pub mod registration;
