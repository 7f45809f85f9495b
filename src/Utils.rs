//! different utility modules used throughout the project
/// tiny module to save solutions and convergence tables into files
pub mod logger;
/// tiny module to plot solutions and convergence curves
pub mod plots;
