pub mod booking;
pub mod place;
pub mod review;
pub mod user;
