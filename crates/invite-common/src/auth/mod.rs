//! Token signing for redeemed invitations

mod jwt;

pub use jwt::{Claims, IssuedToken, JwtService};
