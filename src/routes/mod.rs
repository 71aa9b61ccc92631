pub mod root;
pub mod signup;
