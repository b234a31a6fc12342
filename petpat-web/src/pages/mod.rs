pub mod calculator;
pub mod home;
pub mod method;
pub mod not_found;
