pub mod common;
pub mod message;

#[cfg(test)]
mod test;
