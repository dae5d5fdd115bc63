pub mod notice_bus;
pub mod session;
pub mod storage;
pub mod upload;
