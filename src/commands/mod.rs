pub mod get;
pub mod init;
pub mod inspect;
pub mod list;
pub mod set;
