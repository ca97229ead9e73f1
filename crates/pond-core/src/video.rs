/// What to do with a lazy video once it comes within range of the viewport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoAction {
    /// Copy this URL into the `<source>` and reload the element.
    Load(String),
    /// No deferred source; just stop observing.
    Skip,
}

impl VideoAction {
    /// `data_src` is the deferred `data-src` value of the video's
    /// `source[data-src]` child, if it has one.
    pub fn for_source(data_src: Option<String>) -> Self {
        match data_src {
            Some(src) => VideoAction::Load(src),
            None => VideoAction::Skip,
        }
    }
}
