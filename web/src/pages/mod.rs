pub mod home;
pub mod restaurant;
