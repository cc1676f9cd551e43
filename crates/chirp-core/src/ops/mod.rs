pub mod store;

pub use store::{read_store, shared_store, write_store, SharedStore, UserStore};
