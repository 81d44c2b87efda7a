//! Invitation model -> entity mapper

use invite_core::entities::InvitationCode;
use invite_core::value_objects::RowKey;

use crate::models::InvitationModel;

/// Convert InvitationModel to InvitationCode entity
///
/// The row key is taken from the stored row, never from the caller's input.
impl From<InvitationModel> for InvitationCode {
    fn from(model: InvitationModel) -> Self {
        let used = model.is_used();
        InvitationCode {
            key: RowKey::new(model.code.clone()),
            code: model.code,
            used,
        }
    }
}
