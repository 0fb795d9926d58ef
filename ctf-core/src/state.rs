/// Per-resource load state. Every cached resource carries its own state so
/// a failing fetch only degrades the view that depends on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    None,
    Pending,
    Done,
    Error,
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
