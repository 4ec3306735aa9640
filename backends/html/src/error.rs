/// Errors raised while attaching a widget to a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The page has no container with the widget's root id.
    #[error("Root element #{0} not found")]
    TargetMissing(String),
}
