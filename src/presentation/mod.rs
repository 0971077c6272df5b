pub mod alerts;
pub mod form;
pub mod navigator;
pub mod sign_in;
pub mod sign_up;
