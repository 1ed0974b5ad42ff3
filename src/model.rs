use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

/// A stored link. Immutable once created; identified by its title within
/// the owning group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub keywords: BTreeSet<String>,
    pub group_name: String,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(
        title: &str,
        url: &str,
        keywords: BTreeSet<String>,
        group_name: &str,
    ) -> Result<Self> {
        require_non_blank(title, "bookmark title")?;
        require_non_blank(group_name, "group name")?;
        reqwest::Url::parse(url)
            .map_err(|e| VaultError::InvalidArgument(format!("url {:?} is not valid: {}", url, e)))?;

        Ok(Self {
            title: title.to_string(),
            url: url.to_string(),
            keywords,
            group_name: group_name.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// Interface of the external collaborator that turns a raw URL into a
/// fully-populated bookmark. Title and keyword extraction live outside
/// this crate; the store only ever sees finished [`Bookmark`] values.
pub trait BookmarkSource {
    fn bookmark(&self, url: &str, group_name: &str) -> Result<Bookmark>;
}

/// A named collection of bookmarks keyed by case-sensitive title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    bookmarks: HashMap<String, Bookmark>,
}

impl Group {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bookmarks: HashMap::new(),
        }
    }

    /// Insert a bookmark under its title. A same-title insert is a no-op
    /// and returns false; existing entries are never overwritten.
    pub fn add(&mut self, bookmark: Bookmark) -> bool {
        if self.bookmarks.contains_key(&bookmark.title) {
            return false;
        }
        self.bookmarks.insert(bookmark.title.clone(), bookmark);
        true
    }

    /// Remove the bookmark whose title matches `title` case-insensitively.
    pub fn remove_matching(&mut self, title: &str) -> Option<Bookmark> {
        let key = self
            .bookmarks
            .keys()
            .find(|k| k.eq_ignore_ascii_case(title))
            .cloned()?;
        self.bookmarks.remove(&key)
    }

    /// Apply a batch of removals by exact title. Returns how many were
    /// actually removed.
    pub(crate) fn remove_titles(&mut self, titles: &[String]) -> usize {
        let mut removed = 0;
        for title in titles {
            if self.bookmarks.remove(title).is_some() {
                removed += 1;
            }
        }
        removed
    }

    pub fn contains(&self, title: &str) -> bool {
        self.bookmarks.contains_key(title)
    }

    pub fn bookmarks(&self) -> impl Iterator<Item = &Bookmark> {
        self.bookmarks.values()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}

pub(crate) fn require_non_blank(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VaultError::InvalidArgument(format!(
            "{} can not be blank",
            what
        )));
    }
    Ok(())
}
