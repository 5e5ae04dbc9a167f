pub mod store;

pub use store::LabelStore;
