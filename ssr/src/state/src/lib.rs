pub mod converter;
#[cfg(feature = "ssr")]
pub mod server;
