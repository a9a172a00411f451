pub mod fusion;
pub mod gallery;
