// Adapters layer: concrete implementations for external systems (file storage, reference data, http).

pub mod http;
pub mod reference;
pub mod storage;
