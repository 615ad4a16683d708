pub mod interface;
pub mod filesystem;
pub mod http;
pub mod s3;
pub mod memory;
pub mod factory;

pub use interface::{RecordStoreInterface, StorageError};
pub use filesystem::FileRecordStore;
pub use http::HttpRecordStore;
pub use s3::S3RecordStore;
pub use memory::MemoryRecordStore;
pub use factory::RecordStoreFactory;
