pub mod convert;
pub mod inspect;

#[cfg(test)]
mod fixtures;
