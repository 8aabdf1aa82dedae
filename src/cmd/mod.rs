pub mod goto;
pub mod init;
pub mod select;
pub mod session;
pub mod show;
