// Copyright 2024 the glue-model authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;

use glue_core::error::{Error, FieldViolation};

/// Request message for `TagResource`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TagResourceRequest {
    /// The ARN of the Glue resource to which to add the tags.
    ///
    /// Constraints: length 1-10240, pattern `arn:aws:glue:.*`.
    pub resource_arn: Option<String>,

    /// Tags to add to this resource.
    ///
    /// Constraints: at most 50 entries.
    pub tags_to_add: Option<HashMap<String, String>>,
}

impl TagResourceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_arn][TagResourceRequest::resource_arn].
    pub fn set_resource_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_arn = Some(v.into());
        self
    }

    /// Replaces the contents of [tags_to_add][TagResourceRequest::tags_to_add].
    pub fn set_tags_to_add<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags_to_add = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags_to_add][TagResourceRequest::tags_to_add], failing on a duplicate key.
    pub fn add_tags_to_add_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.tags_to_add.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "TagsToAdd",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [tags_to_add][TagResourceRequest::tags_to_add] to unset.
    pub fn clear_tags_to_add(mut self) -> Self {
        self.tags_to_add = None;
        self
    }
}

/// Response message for `TagResource`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct TagResourceResult {}

impl TagResourceResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `UntagResource`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UntagResourceRequest {
    /// The ARN of the resource from which to remove the tags.
    pub resource_arn: Option<String>,

    /// Tags to remove from this resource.
    ///
    /// Constraints: at most 50 entries.
    pub tags_to_remove: Option<Vec<String>>,
}

impl UntagResourceRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_arn][UntagResourceRequest::resource_arn].
    pub fn set_resource_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_arn = Some(v.into());
        self
    }

    /// Replaces the contents of [tags_to_remove][UntagResourceRequest::tags_to_remove].
    pub fn set_tags_to_remove<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags_to_remove = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [tags_to_remove][UntagResourceRequest::tags_to_remove], creating the list if unset.
    pub fn add_tags_to_remove<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags_to_remove
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `UntagResource`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UntagResourceResult {}

impl UntagResourceResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetTags`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTagsRequest {
    /// The ARN of the resource for which to retrieve tags.
    pub resource_arn: Option<String>,
}

impl GetTagsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [resource_arn][GetTagsRequest::resource_arn].
    pub fn set_resource_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_arn = Some(v.into());
        self
    }
}

/// Response message for `GetTags`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetTagsResult {
    /// The requested tags.
    pub tags: Option<HashMap<String, String>>,
}

impl GetTagsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [tags][GetTagsResult::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][GetTagsResult::tags], failing on a duplicate key.
    pub fn add_tags_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.tags.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Tags",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [tags][GetTagsResult::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}
