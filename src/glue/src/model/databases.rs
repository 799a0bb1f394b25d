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

/// The `Database` object represents a logical grouping of tables that might
/// reside in a Hive metastore or an RDBMS.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Database {
    /// The name of the database. For Hive compatibility, this is folded to
    /// lowercase when it is stored.
    ///
    /// Constraints: length 1-255, single-line text.
    pub name: Option<String>,

    /// A description of the database.
    pub description: Option<String>,

    /// The location of the database (for example, an HDFS path).
    pub location_uri: Option<String>,

    /// These key-value pairs define parameters and properties of the
    /// database.
    pub parameters: Option<HashMap<String, String>>,

    /// The time at which the metadata database was created in the catalog.
    pub create_time: Option<wkt::Timestamp>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Database::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Database::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [location_uri][Database::location_uri].
    pub fn set_location_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.location_uri = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][Database::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][Database::parameters], failing on a duplicate key.
    pub fn add_parameters_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Parameters",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [parameters][Database::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }

    /// Sets the value of [create_time][Database::create_time].
    pub fn set_create_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }
}

/// The structure used to create or update a database.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DatabaseInput {
    /// The name of the database. For Hive compatibility, this is folded to
    /// lowercase when it is stored.
    pub name: Option<String>,

    /// A description of the database.
    pub description: Option<String>,

    /// The location of the database (for example, an HDFS path).
    pub location_uri: Option<String>,

    /// These key-value pairs define parameters and properties of the
    /// database.
    pub parameters: Option<HashMap<String, String>>,
}

impl DatabaseInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DatabaseInput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][DatabaseInput::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [location_uri][DatabaseInput::location_uri].
    pub fn set_location_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.location_uri = Some(v.into());
        self
    }

    /// Replaces the contents of [parameters][DatabaseInput::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [parameters][DatabaseInput::parameters], failing on a duplicate key.
    pub fn add_parameters_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.parameters.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Parameters",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [parameters][DatabaseInput::parameters] to unset.
    pub fn clear_parameters(mut self) -> Self {
        self.parameters = None;
        self
    }
}

/// Request message for `CreateDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateDatabaseRequest {
    /// The ID of the Data Catalog in which to create the database. If none
    /// is provided, the AWS account ID is used by default.
    pub catalog_id: Option<String>,

    /// The metadata for the database.
    pub database_input: Option<DatabaseInput>,
}

impl CreateDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][CreateDatabaseRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [database_input][CreateDatabaseRequest::database_input].
    pub fn set_database_input<T: Into<DatabaseInput>>(mut self, v: T) -> Self {
        self.database_input = Some(v.into());
        self
    }
}

/// Response message for `CreateDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateDatabaseResult {}

impl CreateDatabaseResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDatabaseRequest {
    /// The ID of the Data Catalog in which the database resides.
    pub catalog_id: Option<String>,

    /// The name of the database to retrieve. For Hive compatibility, this
    /// should be all lowercase.
    pub name: Option<String>,
}

impl GetDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetDatabaseRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [name][GetDatabaseRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `GetDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDatabaseResult {
    /// The definition of the specified database in the Data Catalog.
    pub database: Option<Database>,
}

impl GetDatabaseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [database][GetDatabaseResult::database].
    pub fn set_database<T: Into<Database>>(mut self, v: T) -> Self {
        self.database = Some(v.into());
        self
    }
}

/// Request message for `GetDatabases`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDatabasesRequest {
    /// The ID of the Data Catalog from which to retrieve databases.
    pub catalog_id: Option<String>,

    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,

    /// The maximum number of databases to return in one response.
    ///
    /// Constraints: 1-1000.
    pub max_results: Option<i32>,
}

impl GetDatabasesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetDatabasesRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetDatabasesRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetDatabasesRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetDatabases`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDatabasesResult {
    /// A list of `Database` objects from the specified catalog.
    pub database_list: Option<Vec<Database>>,

    /// A continuation token for paginating the returned list of tokens,
    /// returned if the current segment of the list is not the last.
    pub next_token: Option<String>,
}

impl GetDatabasesResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [database_list][GetDatabasesResult::database_list].
    pub fn set_database_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Database>,
    {
        self.database_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [database_list][GetDatabasesResult::database_list], creating the list if unset.
    pub fn add_database_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Database>,
    {
        self.database_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetDatabasesResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `UpdateDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateDatabaseRequest {
    /// The ID of the Data Catalog in which the metadata database resides.
    pub catalog_id: Option<String>,

    /// The name of the database to update in the catalog. For Hive
    /// compatibility, this is folded to lowercase.
    pub name: Option<String>,

    /// A `DatabaseInput` object specifying the new definition of the
    /// metadata database in the catalog.
    pub database_input: Option<DatabaseInput>,
}

impl UpdateDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdateDatabaseRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateDatabaseRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [database_input][UpdateDatabaseRequest::database_input].
    pub fn set_database_input<T: Into<DatabaseInput>>(mut self, v: T) -> Self {
        self.database_input = Some(v.into());
        self
    }
}

/// Response message for `UpdateDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateDatabaseResult {}

impl UpdateDatabaseResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteDatabase`.
///
/// The service deletes the database's tables asynchronously after the call
/// succeeds; delete table versions and partitions first to reclaim them
/// deterministically.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteDatabaseRequest {
    /// The ID of the Data Catalog in which the database resides.
    pub catalog_id: Option<String>,

    /// The name of the database to delete. For Hive compatibility, this
    /// must be all lowercase.
    pub name: Option<String>,
}

impl DeleteDatabaseRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteDatabaseRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [name][DeleteDatabaseRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteDatabase`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteDatabaseResult {}

impl DeleteDatabaseResult {
    pub fn new() -> Self {
        Self::default()
    }
}
