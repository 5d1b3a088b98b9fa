pub mod response;
pub mod service;
