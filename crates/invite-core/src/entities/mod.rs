//! Domain entities - core business objects

mod invitation;

pub use invitation::InvitationCode;
