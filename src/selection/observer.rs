//! Change notification for selection stores.

/// Receives the selection after every change.
///
/// The store calls [`selection_changed`](SelectionObserver::selection_changed)
/// once per mutation that actually altered the list, with the list as it
/// is after the mutation. Operations that turn out to be no-ops do not
/// notify.
pub trait SelectionObserver<A> {
    fn selection_changed(&mut self, assets: &[A]);
}

/// Observer that ignores every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl<A> SelectionObserver<A> for NoopObserver {
    fn selection_changed(&mut self, _assets: &[A]) {}
}

impl<A, F> SelectionObserver<A> for F
where
    F: FnMut(&[A]),
{
    fn selection_changed(&mut self, assets: &[A]) {
        self(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |assets: &[u32]| seen.push(assets.len());
            SelectionObserver::<u32>::selection_changed(&mut observer, &[1, 2, 3]);
            SelectionObserver::<u32>::selection_changed(&mut observer, &[]);
        }
        assert_eq!(seen, vec![3, 0]);
    }

    #[test]
    fn noop_observer_accepts_any_asset_type() {
        let mut observer = NoopObserver;
        SelectionObserver::<&str>::selection_changed(&mut observer, &["a"]);
        SelectionObserver::<u8>::selection_changed(&mut observer, &[]);
    }
}
