//! # Header Source Transitions
//!
//! A header in pattern mode is a full-bleed fill; in url or upload mode it
//! is a logo. Moving between the two families rewrites the header's sizing
//! to the layout of the family it enters. Moving between url and upload only
//! changes where the logo comes from.

use crate::mutations::MutationError;
use mailcraft_blocks::{Block, BlockBody, HeaderSource, HeaderStyles};

/// Sizing applied when a header enters a source family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub width: &'static str,
    pub height: &'static str,
    pub padding: &'static str,
    pub object_fit: &'static str,
}

pub const PATTERN_LAYOUT: HeaderLayout = HeaderLayout {
    width: "100%",
    height: "180px",
    padding: "0px",
    object_fit: "cover",
};

pub const LOGO_LAYOUT: HeaderLayout = HeaderLayout {
    width: "180px",
    height: "auto",
    padding: "24px",
    object_fit: "contain",
};

/// Layout to apply for a `from` → `to` switch, if any
pub fn transition_layout(from: HeaderSource, to: HeaderSource) -> Option<&'static HeaderLayout> {
    let from_pattern = from == HeaderSource::Pattern;
    let to_pattern = to == HeaderSource::Pattern;

    match (from_pattern, to_pattern) {
        (false, true) => Some(&PATTERN_LAYOUT),
        (true, false) => Some(&LOGO_LAYOUT),
        _ => None,
    }
}

impl HeaderLayout {
    fn apply_to(&self, styles: &mut HeaderStyles) {
        styles.width = self.width.to_string();
        styles.height = self.height.to_string();
        styles.padding = self.padding.to_string();
        styles.object_fit = self.object_fit.to_string();
    }
}

/// The header `block` switched to `source_type`. Other block types are
/// rejected.
pub fn switch_header_source_type(
    block: &Block,
    source_type: HeaderSource,
) -> Result<Block, MutationError> {
    let mut next = block.clone();

    match &mut next.body {
        BlockBody::Header { content, styles } => {
            if let Some(layout) = transition_layout(content.source_type, source_type) {
                layout.apply_to(styles);
            }
            content.source_type = source_type;
            Ok(next)
        }
        _ => Err(MutationError::NotAHeader(block.id.clone())),
    }
}
