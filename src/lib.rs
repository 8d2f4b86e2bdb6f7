pub mod app;
pub mod config;
pub mod generators;
pub mod grid;
pub mod solvers;
