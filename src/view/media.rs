//! Media element attribute swapping
//!
//! Grid-mode media carry a static and an animated source pair in data
//! attributes; hovering swaps the live `src`/`srcset` to the animated pair
//! and leaving restores the static one. Lazy loading and the lightbox are
//! external libraries, reachable only through [`MediaCapabilities`].

/// Attribute carrying the static source
pub const DATA_SRC: &str = "data-src";
/// Attribute carrying the static source set
pub const DATA_SRCSET: &str = "data-srcset";
/// Attribute carrying the animated source
pub const DATA_SRC_ANIMATED: &str = "data-src-animated";
/// Attribute carrying the animated source set
pub const DATA_SRCSET_ANIMATED: &str = "data-srcset-animated";

/// Opaque media libraries attached once at page init (grid mode only)
pub trait MediaCapabilities {
    /// Enable lazy loading for grid media
    fn attach_lazy_loading(&mut self);

    /// Enable the lightbox for grid media links
    fn attach_lightbox(&mut self);
}

/// Live and data-attribute sources of one media element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaElement {
    /// Live `src`
    pub src: String,
    /// Live `srcset`
    pub srcset: String,
    static_src: String,
    static_srcset: String,
    animated: Option<(String, String)>,
}

impl MediaElement {
    /// A media element with only a static source pair
    pub fn new(src: impl Into<String>, srcset: impl Into<String>) -> Self {
        let src = src.into();
        let srcset = srcset.into();
        Self {
            static_src: src.clone(),
            static_srcset: srcset.clone(),
            src,
            srcset,
            animated: None,
        }
    }

    /// Build from an element's data attributes; `None` without a static source
    pub fn from_attrs(attr: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let src = attr(DATA_SRC)?;
        let srcset = attr(DATA_SRCSET).unwrap_or_default();
        let media = Self::new(src, srcset);
        match attr(DATA_SRC_ANIMATED) {
            Some(animated_src) => {
                let animated_srcset = attr(DATA_SRCSET_ANIMATED).unwrap_or_default();
                Some(media.with_animated(animated_src, animated_srcset))
            }
            None => Some(media),
        }
    }

    /// Add an animated source pair (video stills)
    pub fn with_animated(
        mut self,
        src_animated: impl Into<String>,
        srcset_animated: impl Into<String>,
    ) -> Self {
        self.animated = Some((src_animated.into(), srcset_animated.into()));
        self
    }

    /// Hover entered: swap to the animated pair, if present
    pub fn begin_hover(&mut self) {
        if let Some((src, srcset)) = &self.animated {
            self.src = src.clone();
            self.srcset = srcset.clone();
        }
    }

    /// Hover left: restore the static pair
    pub fn end_hover(&mut self) {
        self.src = self.static_src.clone();
        self.srcset = self.static_srcset.clone();
    }
}
