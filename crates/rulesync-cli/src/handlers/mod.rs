pub mod convert;
pub mod generate;
pub mod init;
pub mod watch;
