//! Authentication module
//!
//! Provides JWT-based authentication, bcrypt password hashing and the
//! ownership rule for mutating products.

mod jwt;
mod middleware;
mod password;
mod policy;

pub use jwt::{Claims, JwtService};
pub use middleware::{authenticate, parse_bearer, require_auth, AuthUser};
pub use password::{PasswordService, PASSWORD_HASH_COST};
pub use policy::can_modify;
