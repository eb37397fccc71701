pub mod find;

pub use find::run_find;
