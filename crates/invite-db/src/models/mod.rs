//! Database row models

mod invitation;

pub use invitation::InvitationModel;
