pub mod init;
pub mod menu;
pub mod validate;
