pub mod logs;
pub mod xml;
