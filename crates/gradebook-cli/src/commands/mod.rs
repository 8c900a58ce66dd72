pub mod evaluate;
pub mod init;
pub mod sheet;
pub mod slots;
pub mod todo;
