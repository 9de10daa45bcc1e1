// SPDX-License-Identifier: MPL-2.0
//! URL templates for the operations of one collection.
//!
//! Templates are relative to the API base URL and may contain an `{id}`
//! segment, which is replaced by the percent-encoded entity id.

use crate::application::port::FetchError;
use crate::domain::EntityId;
use url::Url;

/// Placeholder segment replaced by the entity id.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Relative URL templates of a collection resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub list: String,
    pub detail: String,
    pub create: String,
    pub edit: String,
    pub delete: String,
    pub toggle_favorite: String,
}

impl Endpoints {
    /// Conventional REST layout under `collection`.
    #[must_use]
    pub fn for_collection(collection: &str) -> Self {
        let collection = collection.trim_matches('/');
        let item = format!("{collection}/{ID_PLACEHOLDER}");
        Self {
            list: collection.to_owned(),
            detail: item.clone(),
            create: collection.to_owned(),
            edit: item.clone(),
            delete: item,
            toggle_favorite: format!("{collection}/favorite"),
        }
    }
}

/// Resolves `template` against `base`, substituting `id` for `{id}`.
///
/// # Errors
///
/// Returns a [`FetchError`] of kind `Request` if the base URL cannot carry a
/// path or the template needs an id that was not given.
pub fn resolve(base: &Url, template: &str, id: Option<&EntityId>) -> Result<Url, FetchError> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| FetchError::request(format!("base URL `{base}` cannot have a path")))?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            if segment == ID_PLACEHOLDER {
                let id = id.ok_or_else(|| {
                    FetchError::request(format!("endpoint `{template}` needs an id"))
                })?;
                segments.push(id.as_str());
            } else {
                segments.push(segment);
            }
        }
    }
    Ok(url)
}
