//! User-facing strings for rendered documentation pages.

/// Texts woven into rendered fragments.
///
/// The defaults are English; hosts with their own language packs replace
/// them wholesale. Values are trusted markup-free text supplied by the
/// operator, inserted into fragments as-is.
#[derive(Debug, Clone)]
pub struct Messages {
    /// Label of the download link above the documentation.
    pub download_html: String,
    /// Label of the navigation link back to the main admin view.
    pub back_to_main_view: String,
    /// Introductory paragraph shown before the documentation.
    pub documentation_intro: String,
    /// Notice shown when no XSLT processor is installed.
    pub extension_required: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            download_html: "Download HTML file".to_owned(),
            back_to_main_view: "Back to main view".to_owned(),
            documentation_intro: "This documentation is generated automatically from the \
                install.xml files found in the db directories of your installation. Only the \
                most relevant attributes and features are shown."
                .to_owned(),
            extension_required: "Sorry - the xsltproc XSLT processor is required for this \
                action. Please install it if you want to use this feature."
                .to_owned(),
        }
    }
}
