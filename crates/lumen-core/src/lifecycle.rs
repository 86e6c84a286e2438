/// Visibility-driven lifecycle shared by scroll and reveal engines.
///
/// `Idle` (not visible) → `Active` (visible, updating) → `Idle` when replay is
/// allowed, or `Settled` for single-shot engines. `Unmounted` is terminal and
/// reachable from every state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Active,
    Settled,
    Unmounted,
}

impl Phase {
    pub fn is_live(self) -> bool {
        !matches!(self, Self::Unmounted)
    }
}
