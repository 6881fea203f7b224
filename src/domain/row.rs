// SPDX-License-Identifier: MPL-2.0
//! The fixed list of rows shown on the list screen.
//!
//! URLs are kept as the raw strings they were declared with. Parsing happens
//! at the network boundary, where an unparseable address degrades to
//! "no image" instead of failing.

/// One entry of the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A thumbnail-only entry.
    Image { title: String, url: String },

    /// An entry whose thumbnail opens a separately fetched full-resolution image.
    ZoomableImage {
        title: String,
        preview_url: String,
        full_url: String,
    },
}

impl Row {
    pub fn image(title: impl Into<String>, url: impl Into<String>) -> Self {
        Row::Image {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn zoomable(
        title: impl Into<String>,
        preview_url: impl Into<String>,
        full_url: impl Into<String>,
    ) -> Self {
        Row::ZoomableImage {
            title: title.into(),
            preview_url: preview_url.into(),
            full_url: full_url.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Row::Image { title, .. } | Row::ZoomableImage { title, .. } => title,
        }
    }

    /// Address of the image shown in the list cell.
    #[must_use]
    pub fn thumbnail_source(&self) -> &str {
        match self {
            Row::Image { url, .. } => url,
            Row::ZoomableImage { preview_url, .. } => preview_url,
        }
    }

    /// Address of the full-resolution image, for rows that have one.
    #[must_use]
    pub fn full_resolution_source(&self) -> Option<&str> {
        match self {
            Row::Image { .. } => None,
            Row::ZoomableImage { full_url, .. } => Some(full_url),
        }
    }
}

/// Ordered, immutable collection of rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowList {
    rows: Vec<Row>,
}

impl RowList {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// The rows shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(vec![
            Row::image(
                "Guinea pig",
                "https://news.clas.ufl.edu/files/2020/06/AdobeStock_345118478-copy-1440x961-1.jpg",
            ),
            Row::zoomable(
                "Large satellite photo",
                "https://ichef.bbci.co.uk/news/976/cpsprodpb/F3BC/production/_113769326_1.jpg",
                "https://www.dropbox.com/s/vylo8edr24nzrcz/Airbus_Pleiades_50cm_8bit_RGB_Yogyakarta.jpg?dl=1",
            ),
        ])
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[must_use]
    pub fn row_at(&self, index: usize) -> &Row {
        assert!(
            index < self.rows.len(),
            "row index {} out of range (count is {})",
            index,
            self.rows.len()
        );
        &self.rows[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl Default for RowList {
    fn default() -> Self {
        Self::builtin()
    }
}
