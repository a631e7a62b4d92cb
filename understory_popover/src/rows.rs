// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu rows.
//!
//! Each row is resolved to a [`RowContent`] variant when the model is built, so renderers
//! match on the variant instead of inspecting row types at draw time.

use alloc::string::String;
use alloc::vec::Vec;

/// Opaque handle to an icon the host knows how to draw (an asset name, a symbol id, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

/// A row with a title plus optional styling, icon, selection mark, and host payload.
#[derive(Clone, Debug, PartialEq)]
pub struct RichRow<X = ()> {
    /// Plain title.
    pub title: String,
    /// Styled variant of the title, shown in place of `title` when present.
    pub styled_title: Option<String>,
    /// Icon drawn before the title.
    pub icon: Option<IconRef>,
    /// Whether the row is drawn with the selected text and background style.
    pub selected: bool,
    /// Host payload carried along with the row.
    pub extra: X,
}

impl<X: Default> RichRow<X> {
    /// An unselected row with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            styled_title: None,
            icon: None,
            selected: false,
            extra: X::default(),
        }
    }
}

/// Content of one menu row.
#[derive(Clone, Debug, PartialEq)]
pub enum RowContent<X = ()> {
    /// A bare title.
    PlainText(String),
    /// A title with extras.
    Rich(RichRow<X>),
}

impl<X> RowContent<X> {
    /// Title shown for the row: the styled title when there is one.
    pub fn title(&self) -> &str {
        match self {
            Self::PlainText(title) => title,
            Self::Rich(row) => row.styled_title.as_deref().unwrap_or(&row.title),
        }
    }

    /// Whether the row carries the selected mark.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Rich(row) if row.selected)
    }

    /// Host payload, for rich rows.
    pub fn extra(&self) -> Option<&X> {
        match self {
            Self::PlainText(_) => None,
            Self::Rich(row) => Some(&row.extra),
        }
    }
}

impl<X> From<&str> for RowContent<X> {
    fn from(title: &str) -> Self {
        Self::PlainText(title.into())
    }
}

impl<X> From<String> for RowContent<X> {
    fn from(title: String) -> Self {
        Self::PlainText(title)
    }
}

impl<X> From<RichRow<X>> for RowContent<X> {
    fn from(row: RichRow<X>) -> Self {
        Self::Rich(row)
    }
}

/// The rows of one menu.
///
/// Plain-text rows may take icons from a separate list matched by index
/// ([`MenuModel::with_icons`]); rich rows always use their own icon.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuModel<X = ()> {
    rows: Vec<RowContent<X>>,
    icons: Vec<IconRef>,
}

impl<X> Default for MenuModel<X> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            icons: Vec::new(),
        }
    }
}

impl<X> MenuModel<X> {
    /// A model over the given rows.
    pub fn new(rows: Vec<RowContent<X>>) -> Self {
        Self {
            rows,
            icons: Vec::new(),
        }
    }

    /// A model of plain-text rows.
    pub fn from_titles<I>(titles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(
            titles
                .into_iter()
                .map(|t| RowContent::PlainText(t.into()))
                .collect(),
        )
    }

    /// Attach icons to plain-text rows by index. Extra icons are ignored; rows past the end
    /// of the list get none.
    #[must_use]
    pub fn with_icons<I>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = IconRef>,
    {
        self.icons = icons.into_iter().collect();
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the model has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[RowContent<X>] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&RowContent<X>> {
        self.rows.get(index)
    }

    /// Title of the row at `index`.
    pub fn title(&self, index: usize) -> Option<&str> {
        self.row(index).map(RowContent::title)
    }

    /// Icon of the row at `index`.
    pub fn icon(&self, index: usize) -> Option<&IconRef> {
        match self.row(index)? {
            RowContent::PlainText(_) => self.icons.get(index),
            RowContent::Rich(row) => row.icon.as_ref(),
        }
    }

    /// Whether the row at `index` carries the selected mark.
    pub fn is_selected(&self, index: usize) -> bool {
        self.row(index).is_some_and(RowContent::is_selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn plain_rows_take_icons_by_index() {
        let model: MenuModel = MenuModel::from_titles(["Copy", "Paste", "Delete"])
            .with_icons([IconRef::from("copy"), IconRef::from("paste")]);
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.icon(1), Some(&IconRef::from("paste")));
        assert_eq!(model.icon(2), None);
        assert_eq!(model.icon(3), None);
    }

    #[test]
    fn rich_rows_ignore_index_icons() {
        let mut rich: RichRow<u32> = RichRow::new("Share");
        rich.extra = 7;
        let model = MenuModel::new(vec![RowContent::from("Copy"), RowContent::from(rich)])
            .with_icons([IconRef::from("copy"), IconRef::from("unused")]);
        assert_eq!(model.icon(0), Some(&IconRef::from("copy")));
        assert_eq!(model.icon(1), None);
        assert_eq!(model.row(1).and_then(RowContent::extra), Some(&7));
    }

    #[test]
    fn styled_title_wins_and_selection_is_rich_only() {
        let row: RichRow = RichRow {
            styled_title: Some("Bold".into()),
            selected: true,
            ..RichRow::new("Plain")
        };
        let model = MenuModel::new(vec![RowContent::from(row), RowContent::from("Other")]);
        assert_eq!(model.title(0), Some("Bold"));
        assert!(model.is_selected(0));
        assert!(!model.is_selected(1));
        assert!(!model.is_selected(9));
    }
}
