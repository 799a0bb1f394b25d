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

use super::ErrorDetail;

/// The type of a catalog connection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConnectionType {
    Jdbc,
    Sftp,
    Mongodb,
    Kafka,
    Network,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [ConnectionType::as_str].
    UnknownValue(String),
}

impl ConnectionType {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Jdbc => "JDBC",
            Self::Sftp => "SFTP",
            Self::Mongodb => "MONGODB",
            Self::Kafka => "KAFKA",
            Self::Network => "NETWORK",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for ConnectionType {
    fn from(value: &str) -> Self {
        match value {
            "JDBC" => Self::Jdbc,
            "SFTP" => Self::Sftp,
            "MONGODB" => Self::Mongodb,
            "KAFKA" => Self::Kafka,
            "NETWORK" => Self::Network,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for ConnectionType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for ConnectionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// Specifies the physical requirements for a connection.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct PhysicalConnectionRequirements {
    /// The subnet ID used by the connection.
    ///
    /// Constraints: length 1-255, single-line text.
    pub subnet_id: Option<String>,

    /// The security group ID list used by the connection.
    ///
    /// Constraints: at most 50 entries.
    pub security_group_id_list: Option<Vec<String>>,

    /// The connection's Availability Zone.
    pub availability_zone: Option<String>,
}

impl PhysicalConnectionRequirements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [subnet_id][PhysicalConnectionRequirements::subnet_id].
    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    /// Replaces the contents of [security_group_id_list][PhysicalConnectionRequirements::security_group_id_list].
    pub fn set_security_group_id_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_id_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [security_group_id_list][PhysicalConnectionRequirements::security_group_id_list], creating the list if unset.
    pub fn add_security_group_id_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_id_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [availability_zone][PhysicalConnectionRequirements::availability_zone].
    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }
}

/// Defines a connection to a data source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Connection {
    /// The name of the connection definition.
    ///
    /// Constraints: length 1-255, single-line text.
    pub name: Option<String>,

    /// The description of the connection.
    ///
    /// Constraints: length 0-2048.
    pub description: Option<String>,

    /// The type of the connection. Currently SFTP is not supported.
    pub connection_type: Option<ConnectionType>,

    /// A list of criteria that can be used in selecting this connection.
    pub match_criteria: Option<Vec<String>>,

    /// These key-value pairs define parameters for the connection.
    pub connection_properties: Option<HashMap<String, String>>,

    /// A map of physical connection requirements, such as virtual private
    /// cloud (VPC) and security group, that the service needs to
    /// successfully make this connection.
    pub physical_connection_requirements: Option<PhysicalConnectionRequirements>,

    /// The time that this connection definition was created.
    pub creation_time: Option<wkt::Timestamp>,

    /// The last time that this connection definition was updated.
    pub last_updated_time: Option<wkt::Timestamp>,

    /// The user, group, or role that last updated this connection
    /// definition.
    pub last_updated_by: Option<String>,
}

impl Connection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Connection::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][Connection::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [connection_type][Connection::connection_type].
    pub fn set_connection_type<T: Into<ConnectionType>>(mut self, v: T) -> Self {
        self.connection_type = Some(v.into());
        self
    }

    /// Replaces the contents of [match_criteria][Connection::match_criteria].
    pub fn set_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [match_criteria][Connection::match_criteria], creating the list if unset.
    pub fn add_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [connection_properties][Connection::connection_properties].
    pub fn set_connection_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.connection_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [connection_properties][Connection::connection_properties], failing on a duplicate key.
    pub fn add_connection_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.connection_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "ConnectionProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [connection_properties][Connection::connection_properties] to unset.
    pub fn clear_connection_properties(mut self) -> Self {
        self.connection_properties = None;
        self
    }

    /// Sets the value of [physical_connection_requirements][Connection::physical_connection_requirements].
    pub fn set_physical_connection_requirements<T: Into<PhysicalConnectionRequirements>>(
        mut self,
        v: T,
    ) -> Self {
        self.physical_connection_requirements = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][Connection::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated_time][Connection::last_updated_time].
    pub fn set_last_updated_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated_by][Connection::last_updated_by].
    pub fn set_last_updated_by<T: Into<String>>(mut self, v: T) -> Self {
        self.last_updated_by = Some(v.into());
        self
    }
}

/// A structure that is used to specify a connection to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ConnectionInput {
    /// The name of the connection.
    ///
    /// Constraints: length 1-255, single-line text.
    pub name: Option<String>,

    /// The description of the connection.
    pub description: Option<String>,

    /// The type of the connection. Currently SFTP is not supported.
    pub connection_type: Option<ConnectionType>,

    /// A list of criteria that can be used in selecting this connection.
    pub match_criteria: Option<Vec<String>>,

    /// These key-value pairs define parameters for the connection.
    pub connection_properties: Option<HashMap<String, String>>,

    /// A map of physical connection requirements, such as VPC and security
    /// group, that the service needs to successfully make this connection.
    pub physical_connection_requirements: Option<PhysicalConnectionRequirements>,
}

impl ConnectionInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][ConnectionInput::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][ConnectionInput::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [connection_type][ConnectionInput::connection_type].
    pub fn set_connection_type<T: Into<ConnectionType>>(mut self, v: T) -> Self {
        self.connection_type = Some(v.into());
        self
    }

    /// Replaces the contents of [match_criteria][ConnectionInput::match_criteria].
    pub fn set_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [match_criteria][ConnectionInput::match_criteria], creating the list if unset.
    pub fn add_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [connection_properties][ConnectionInput::connection_properties].
    pub fn set_connection_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.connection_properties =
            Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [connection_properties][ConnectionInput::connection_properties], failing on a duplicate key.
    pub fn add_connection_properties_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.connection_properties.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "ConnectionProperties",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [connection_properties][ConnectionInput::connection_properties] to unset.
    pub fn clear_connection_properties(mut self) -> Self {
        self.connection_properties = None;
        self
    }

    /// Sets the value of [physical_connection_requirements][ConnectionInput::physical_connection_requirements].
    pub fn set_physical_connection_requirements<T: Into<PhysicalConnectionRequirements>>(
        mut self,
        v: T,
    ) -> Self {
        self.physical_connection_requirements = Some(v.into());
        self
    }
}

/// Filters the connection definitions that are returned by the
/// `GetConnections` operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetConnectionsFilter {
    /// A criteria string that must match the criteria recorded in the
    /// connection definition for that definition to be returned.
    pub match_criteria: Option<Vec<String>>,

    /// The type of connections to return.
    pub connection_type: Option<ConnectionType>,
}

impl GetConnectionsFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [match_criteria][GetConnectionsFilter::match_criteria].
    pub fn set_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [match_criteria][GetConnectionsFilter::match_criteria], creating the list if unset.
    pub fn add_match_criteria<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.match_criteria
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [connection_type][GetConnectionsFilter::connection_type].
    pub fn set_connection_type<T: Into<ConnectionType>>(mut self, v: T) -> Self {
        self.connection_type = Some(v.into());
        self
    }
}

/// Request message for `CreateConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateConnectionRequest {
    /// The ID of the Data Catalog in which to create the connection. If none
    /// is provided, the AWS account ID is used by default.
    ///
    /// Constraints: length 1-255, pattern `[ -퟿-�\t]*`.
    pub catalog_id: Option<String>,

    /// A `ConnectionInput` object defining the connection to create.
    pub connection_input: Option<ConnectionInput>,
}

impl CreateConnectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][CreateConnectionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [connection_input][CreateConnectionRequest::connection_input].
    pub fn set_connection_input<T: Into<ConnectionInput>>(mut self, v: T) -> Self {
        self.connection_input = Some(v.into());
        self
    }
}

/// Response message for `CreateConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateConnectionResult {}

impl CreateConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetConnectionRequest {
    /// The ID of the Data Catalog in which the connection resides.
    pub catalog_id: Option<String>,

    /// The name of the connection definition to retrieve.
    pub name: Option<String>,

    /// Allows you to retrieve the connection metadata without returning the
    /// password. Useful for callers lacking `glue:GetConnectionPasswords`
    /// permission.
    pub hide_password: Option<bool>,
}

impl GetConnectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetConnectionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [name][GetConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [hide_password][GetConnectionRequest::hide_password].
    pub fn set_hide_password<T: Into<bool>>(mut self, v: T) -> Self {
        self.hide_password = Some(v.into());
        self
    }
}

/// Response message for `GetConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetConnectionResult {
    /// The requested connection definition.
    pub connection: Option<Connection>,
}

impl GetConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [connection][GetConnectionResult::connection].
    pub fn set_connection<T: Into<Connection>>(mut self, v: T) -> Self {
        self.connection = Some(v.into());
        self
    }
}

/// Request message for `GetConnections`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetConnectionsRequest {
    /// The ID of the Data Catalog in which the connections reside.
    pub catalog_id: Option<String>,

    /// A filter that controls which connections are returned.
    pub filter: Option<GetConnectionsFilter>,

    /// Allows you to retrieve the connection metadata without returning the
    /// password.
    pub hide_password: Option<bool>,

    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,

    /// The maximum number of connections to return in one response.
    ///
    /// Constraints: 1-1000.
    pub max_results: Option<i32>,
}

impl GetConnectionsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][GetConnectionsRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [filter][GetConnectionsRequest::filter].
    pub fn set_filter<T: Into<GetConnectionsFilter>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [hide_password][GetConnectionsRequest::hide_password].
    pub fn set_hide_password<T: Into<bool>>(mut self, v: T) -> Self {
        self.hide_password = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetConnectionsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][GetConnectionsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }
}

/// Response message for `GetConnections`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetConnectionsResult {
    /// A list of requested connection definitions.
    pub connection_list: Option<Vec<Connection>>,

    /// A continuation token, if the list of connections returned does not
    /// include the last of the filtered connections.
    pub next_token: Option<String>,
}

impl GetConnectionsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [connection_list][GetConnectionsResult::connection_list].
    pub fn set_connection_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Connection>,
    {
        self.connection_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [connection_list][GetConnectionsResult::connection_list], creating the list if unset.
    pub fn add_connection_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Connection>,
    {
        self.connection_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetConnectionsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `UpdateConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateConnectionRequest {
    /// The ID of the Data Catalog in which the connection resides.
    pub catalog_id: Option<String>,

    /// The name of the connection definition to update.
    pub name: Option<String>,

    /// A `ConnectionInput` object that redefines the connection in question.
    pub connection_input: Option<ConnectionInput>,
}

impl UpdateConnectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][UpdateConnectionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [name][UpdateConnectionRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [connection_input][UpdateConnectionRequest::connection_input].
    pub fn set_connection_input<T: Into<ConnectionInput>>(mut self, v: T) -> Self {
        self.connection_input = Some(v.into());
        self
    }
}

/// Response message for `UpdateConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateConnectionResult {}

impl UpdateConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteConnectionRequest {
    /// The ID of the Data Catalog in which the connection resides.
    pub catalog_id: Option<String>,

    /// The name of the connection to delete.
    pub connection_name: Option<String>,
}

impl DeleteConnectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][DeleteConnectionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Sets the value of [connection_name][DeleteConnectionRequest::connection_name].
    pub fn set_connection_name<T: Into<String>>(mut self, v: T) -> Self {
        self.connection_name = Some(v.into());
        self
    }
}

/// Response message for `DeleteConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteConnectionResult {}

impl DeleteConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `BatchDeleteConnection`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteConnectionRequest {
    /// The ID of the Data Catalog in which the connections reside. If none
    /// is provided, the AWS account ID is used by default.
    ///
    /// Constraints: length 1-255, single-line text.
    pub catalog_id: Option<String>,

    /// A list of names of the connections to delete.
    ///
    /// Constraints: at most 25 entries.
    pub connection_name_list: Option<Vec<String>>,
}

impl BatchDeleteConnectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [catalog_id][BatchDeleteConnectionRequest::catalog_id].
    pub fn set_catalog_id<T: Into<String>>(mut self, v: T) -> Self {
        self.catalog_id = Some(v.into());
        self
    }

    /// Replaces the contents of [connection_name_list][BatchDeleteConnectionRequest::connection_name_list].
    pub fn set_connection_name_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.connection_name_list = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [connection_name_list][BatchDeleteConnectionRequest::connection_name_list], creating the list if unset.
    pub fn add_connection_name_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.connection_name_list
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchDeleteConnection`.
///
/// Per-connection failures are reported inline in [errors]
/// [BatchDeleteConnectionResult::errors] rather than failing the whole
/// request; inspect both fields.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchDeleteConnectionResult {
    /// A list of names of the connection definitions that were successfully
    /// deleted.
    pub succeeded: Option<Vec<String>>,

    /// A map of the names of connections that were not successfully deleted
    /// to error details.
    pub errors: Option<HashMap<String, ErrorDetail>>,
}

impl BatchDeleteConnectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [succeeded][BatchDeleteConnectionResult::succeeded].
    pub fn set_succeeded<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.succeeded = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [succeeded][BatchDeleteConnectionResult::succeeded], creating the list if unset.
    pub fn add_succeeded<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.succeeded
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [errors][BatchDeleteConnectionResult::errors].
    pub fn set_errors<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ErrorDetail>,
    {
        self.errors = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [errors][BatchDeleteConnectionResult::errors], failing on a duplicate key.
    pub fn add_errors_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<ErrorDetail>,
    {
        let key = key.into();
        let map = self.errors.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Errors",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [errors][BatchDeleteConnectionResult::errors] to unset.
    pub fn clear_errors(mut self) -> Self {
        self.errors = None;
        self
    }
}
