pub mod cipher;
pub mod render;
pub mod report;
pub mod session;
