pub mod impl_fake;
pub mod impl_file;
pub mod impl_http;
pub mod index;
pub mod interface;
