pub mod error;
pub mod form;
pub mod ports;
pub mod validation;
