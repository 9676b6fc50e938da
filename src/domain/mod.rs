pub mod cache;
pub mod draft;
pub mod errors;
pub mod ops;
pub mod ports;
