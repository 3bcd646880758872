pub mod board;
pub mod config;
pub mod event;
pub mod item;
pub mod month;
pub mod replay;
pub mod row;
pub mod slogan;
