/// Fence - completion marker for a submitted command buffer
///
/// Replay is synchronous, so a fence passed to submit is already signalled
/// when submit returns.

#[derive(Debug, Default)]
pub struct Fence {
    pub(crate) signalled: bool,
}

impl Fence {
    pub fn is_signalled(&self) -> bool {
        self.signalled
    }
}
