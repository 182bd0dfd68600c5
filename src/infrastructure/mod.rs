pub mod provider;
pub mod youtube;

#[cfg(test)]
pub mod fake;
