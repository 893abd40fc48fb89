use thiserror::Error;

/// Reasons a project sheet cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("missing `tileworld sheet` header")]
    MissingHeader,

    #[error("gfx row {row} is not 16 hex digits")]
    BadGfxRow { row: usize },

    #[error("sheet lists {kinds} kinds but {images} images")]
    ImageCountMismatch { kinds: usize, images: usize },

    #[error("sheet has no tile kinds")]
    EmptyRoster,
}
