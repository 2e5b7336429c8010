pub mod capture;
pub mod classify;
pub mod correlate;
pub mod filter;
pub mod flow;
pub mod logging;
pub mod render;
pub mod session;
