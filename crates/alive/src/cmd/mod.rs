pub mod connect;
pub mod preview;
pub mod register;
