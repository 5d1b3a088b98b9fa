pub mod currency;
pub mod resize_pricer;
