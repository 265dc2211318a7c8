pub mod init;
pub mod select;

pub use init::cmd_init;
pub use select::cmd_select_from;
