use rand::Rng;

pub const ACCESS_HASH_MIN: u32 = 100_000;
pub const ACCESS_HASH_MAX: u32 = 999_999;

/// Six-digit album access code, uniform over `ACCESS_HASH_MIN..=ACCESS_HASH_MAX`.
///
/// Uniqueness across albums is not checked; two albums may share a code.
pub fn generate_access_hash() -> String {
    rand::thread_rng()
        .gen_range(ACCESS_HASH_MIN..=ACCESS_HASH_MAX)
        .to_string()
}
