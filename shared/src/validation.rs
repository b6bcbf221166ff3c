//! Input validation functions
//!
//! Each validator returns a human-readable message on failure, which the
//! backend surfaces as a 400 response. Email syntax is checked by the
//! backend with the `validator` crate.

const MAX_TEXT_LEN: usize = 255;

const MIN_PASSWORD_CHARS: usize = 8;

/// bcrypt only reads this many bytes of its input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Validate a display name
pub fn validate_full_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Full name cannot be empty".to_string());
    }
    if name.len() > MAX_TEXT_LEN {
        return Err("Full name too long".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err("Password must be at most 72 bytes".to_string());
    }
    Ok(())
}

/// Validate a product name
pub fn validate_product_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Product name cannot be empty".to_string());
    }
    if name.len() > MAX_TEXT_LEN {
        return Err("Product name too long".to_string());
    }
    Ok(())
}

/// Validate a product price
pub fn validate_price(price: i64) -> Result<(), String> {
    if price < 0 {
        return Err("Price cannot be negative".to_string());
    }
    Ok(())
}
