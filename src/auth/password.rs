use bcrypt::BcryptError;

/// Work factor used for all stored hashes.
pub const HASH_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plain, HASH_COST)
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plain, hash)
}
