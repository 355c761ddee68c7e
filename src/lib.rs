pub mod app;
pub mod config;
pub mod logging;
pub mod models;

#[cfg(test)]
mod test;
