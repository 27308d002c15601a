pub mod access_hash;
pub mod logging;
pub mod password;
