use crate::utils::error::Result;

/// A reversible text cipher keyed by a signed shift.
pub trait Cipher: Send + Sync {
    fn encode(&self, message: &str, shift: i64) -> String;
    fn decode(&self, message: &str, shift: i64) -> String;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
