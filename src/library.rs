#[cfg(test)]
pub mod http_stub;
pub mod logger;
