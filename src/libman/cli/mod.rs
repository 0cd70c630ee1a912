mod commands;
mod logger;
mod menu;
mod print;
mod setup;

pub use commands::run;
