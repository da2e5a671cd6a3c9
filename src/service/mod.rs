pub mod import;
pub mod s3;

#[cfg(test)]
pub(crate) mod doubles;
