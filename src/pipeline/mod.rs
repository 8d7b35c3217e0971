pub mod extraction;
pub mod import;
