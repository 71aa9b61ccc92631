pub mod protocols;
pub mod signup_controller;
