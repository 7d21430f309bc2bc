/// Errors produced while building an [`ActionSignature`](crate::ActionSignature).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// The text did not contain the `.` separating the controller and action names.
    #[error("cannot parse `{0}` as an action signature, expected `Controller.Action`")]
    InvalidFormat(String),
}
