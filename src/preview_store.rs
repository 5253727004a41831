#[cfg(test)]
pub mod impl_fake;
pub mod impl_thumbnail;
pub mod interface;
