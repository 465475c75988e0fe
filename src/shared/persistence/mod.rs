mod document_store;

pub use document_store::{DocumentStore, StoreConfig, StoreError};
