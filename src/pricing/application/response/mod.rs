pub mod resize_quote;
