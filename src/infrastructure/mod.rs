pub mod ai;
pub mod console;
pub mod display;
pub mod persistence;
