pub mod brand;
pub mod user;
