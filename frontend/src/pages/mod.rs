pub mod games;
pub mod not_found;
