use serde::Serialize;

/// Display state for the external UI surface.
///
/// The controller is the only writer; the surface reads snapshots and
/// forwards intents. Serialized form is what a front end would render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Last-known vault balance, human decimal form.
    pub balance: String,
    /// The amount the user has typed, exactly as entered.
    pub pending_amount: String,
    /// Outcome notice for the last operation; empty when there is nothing
    /// to report.
    pub status: String,
    /// `true` while a state-changing operation is in flight.
    pub busy: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            balance: "0".to_string(),
            pending_amount: String::new(),
            status: String::new(),
            busy: false,
        }
    }
}
