pub mod domain;
pub mod extract;
