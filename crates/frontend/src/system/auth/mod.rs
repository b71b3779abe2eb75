pub mod storage;

pub use storage::{clear_access_token, get_access_token, LocalStorageTokens};
