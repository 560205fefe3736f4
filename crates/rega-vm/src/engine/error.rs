/// Errors raised while configuring a VM run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("start offset {offset} is past the end of the input ({len} bytes)")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("start offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },
}
