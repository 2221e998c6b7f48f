mod executor;

pub use executor::Assistant;
