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

use super::jobs::WorkerType;

/// A development endpoint where a developer can remotely debug extract,
/// transform, and load (ETL) scripts.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DevEndpoint {
    /// The name of the `DevEndpoint`.
    pub endpoint_name: Option<String>,

    /// The Amazon Resource Name (ARN) of the IAM role used in this
    /// `DevEndpoint`.
    pub role_arn: Option<String>,

    /// A list of security group identifiers used in this `DevEndpoint`.
    pub security_group_ids: Option<Vec<String>>,

    /// The subnet ID for this `DevEndpoint`.
    pub subnet_id: Option<String>,

    /// The YARN endpoint address used by this `DevEndpoint`.
    pub yarn_endpoint_address: Option<String>,

    /// A private IP address to access the `DevEndpoint` within a VPC if
    /// the `DevEndpoint` is created within one.
    pub private_address: Option<String>,

    /// The Apache Zeppelin port for the remote Apache Spark interpreter.
    pub zeppelin_remote_spark_interpreter_port: Option<i32>,

    /// The public IP address used by this `DevEndpoint`. The
    /// `PublicAddress` field is present only when you create a non-virtual
    /// private cloud (VPC) `DevEndpoint`.
    pub public_address: Option<String>,

    /// The current status of this `DevEndpoint`.
    pub status: Option<String>,

    /// The type of predefined worker that is allocated to the development
    /// endpoint.
    pub worker_type: Option<WorkerType>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,

    /// The number of workers of a defined `workerType` that are allocated
    /// to the development endpoint.
    pub number_of_workers: Option<i32>,

    /// The number of Glue Data Processing Units (DPUs) allocated to this
    /// `DevEndpoint`.
    pub number_of_nodes: Option<i32>,

    /// The Amazon Web Services Availability Zone where this `DevEndpoint`
    /// is located.
    pub availability_zone: Option<String>,

    /// The ID of the virtual private cloud (VPC) used by this
    /// `DevEndpoint`.
    pub vpc_id: Option<String>,

    /// The paths to one or more Python libraries in an Amazon S3 bucket
    /// that should be loaded in your `DevEndpoint`. Multiple values must be
    /// complete paths separated by a comma.
    pub extra_python_libs_s3_path: Option<String>,

    /// The path to one or more Java `.jar` files in an S3 bucket that
    /// should be loaded in your `DevEndpoint`.
    pub extra_jars_s3_path: Option<String>,

    /// The reason for a current failure in this `DevEndpoint`.
    pub failure_reason: Option<String>,

    /// The status of the last update.
    pub last_update_status: Option<String>,

    /// The point in time at which this `DevEndpoint` was created.
    pub created_timestamp: Option<wkt::Timestamp>,

    /// The point in time at which this `DevEndpoint` was last modified.
    pub last_modified_timestamp: Option<wkt::Timestamp>,

    /// The public key to be used by this `DevEndpoint` for authentication.
    /// This attribute is provided for backward compatibility because the
    /// recommended attribute to use is public keys.
    pub public_key: Option<String>,

    /// A list of public keys to be used by the `DevEndpoints` for
    /// authentication. Using this attribute is preferred over a single
    /// public key because the public keys allow you to have a different
    /// private key per client.
    pub public_keys: Option<Vec<String>>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this `DevEndpoint`.
    pub security_configuration: Option<String>,

    /// A map of arguments used to configure the `DevEndpoint`.
    pub arguments: Option<HashMap<String, String>>,
}

impl DevEndpoint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][DevEndpoint::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }

    /// Sets the value of [role_arn][DevEndpoint::role_arn].
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }

    /// Replaces the contents of [security_group_ids][DevEndpoint::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [security_group_ids][DevEndpoint::security_group_ids], creating the list if unset.
    pub fn add_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [subnet_id][DevEndpoint::subnet_id].
    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    /// Sets the value of [yarn_endpoint_address][DevEndpoint::yarn_endpoint_address].
    pub fn set_yarn_endpoint_address<T: Into<String>>(mut self, v: T) -> Self {
        self.yarn_endpoint_address = Some(v.into());
        self
    }

    /// Sets the value of [private_address][DevEndpoint::private_address].
    pub fn set_private_address<T: Into<String>>(mut self, v: T) -> Self {
        self.private_address = Some(v.into());
        self
    }

    /// Sets the value of [zeppelin_remote_spark_interpreter_port][DevEndpoint::zeppelin_remote_spark_interpreter_port].
    pub fn set_zeppelin_remote_spark_interpreter_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.zeppelin_remote_spark_interpreter_port = Some(v.into());
        self
    }

    /// Sets the value of [public_address][DevEndpoint::public_address].
    pub fn set_public_address<T: Into<String>>(mut self, v: T) -> Self {
        self.public_address = Some(v.into());
        self
    }

    /// Sets the value of [status][DevEndpoint::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][DevEndpoint::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][DevEndpoint::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][DevEndpoint::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nodes][DevEndpoint::number_of_nodes].
    pub fn set_number_of_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_nodes = Some(v.into());
        self
    }

    /// Sets the value of [availability_zone][DevEndpoint::availability_zone].
    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][DevEndpoint::vpc_id].
    pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = Some(v.into());
        self
    }

    /// Sets the value of [extra_python_libs_s3_path][DevEndpoint::extra_python_libs_s3_path].
    pub fn set_extra_python_libs_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_python_libs_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [extra_jars_s3_path][DevEndpoint::extra_jars_s3_path].
    pub fn set_extra_jars_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_jars_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [failure_reason][DevEndpoint::failure_reason].
    pub fn set_failure_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.failure_reason = Some(v.into());
        self
    }

    /// Sets the value of [last_update_status][DevEndpoint::last_update_status].
    pub fn set_last_update_status<T: Into<String>>(mut self, v: T) -> Self {
        self.last_update_status = Some(v.into());
        self
    }

    /// Sets the value of [created_timestamp][DevEndpoint::created_timestamp].
    pub fn set_created_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_timestamp = Some(v.into());
        self
    }

    /// Sets the value of [last_modified_timestamp][DevEndpoint::last_modified_timestamp].
    pub fn set_last_modified_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_modified_timestamp = Some(v.into());
        self
    }

    /// Sets the value of [public_key][DevEndpoint::public_key].
    pub fn set_public_key<T: Into<String>>(mut self, v: T) -> Self {
        self.public_key = Some(v.into());
        self
    }

    /// Replaces the contents of [public_keys][DevEndpoint::public_keys].
    pub fn set_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.public_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [public_keys][DevEndpoint::public_keys], creating the list if unset.
    pub fn add_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.public_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [security_configuration][DevEndpoint::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Replaces the contents of [arguments][DevEndpoint::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][DevEndpoint::arguments], failing on a duplicate key.
    pub fn add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Arguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [arguments][DevEndpoint::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }
}

/// Custom libraries to be loaded into a development endpoint.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DevEndpointCustomLibraries {
    /// The paths to one or more Python libraries in an Amazon Simple
    /// Storage Service (Amazon S3) bucket that should be loaded in your
    /// `DevEndpoint`. Multiple values must be complete paths separated by a
    /// comma.
    pub extra_python_libs_s3_path: Option<String>,

    /// The path to one or more Java `.jar` files in an S3 bucket that
    /// should be loaded in your `DevEndpoint`.
    pub extra_jars_s3_path: Option<String>,
}

impl DevEndpointCustomLibraries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [extra_python_libs_s3_path][DevEndpointCustomLibraries::extra_python_libs_s3_path].
    pub fn set_extra_python_libs_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_python_libs_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [extra_jars_s3_path][DevEndpointCustomLibraries::extra_jars_s3_path].
    pub fn set_extra_jars_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_jars_s3_path = Some(v.into());
        self
    }
}

/// Request message for `CreateDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateDevEndpointRequest {
    /// The name to be assigned to the new `DevEndpoint`.
    pub endpoint_name: Option<String>,

    /// The IAM role for the `DevEndpoint`.
    pub role_arn: Option<String>,

    /// Security group IDs for the security groups to be used by the new
    /// `DevEndpoint`.
    pub security_group_ids: Option<Vec<String>>,

    /// The subnet ID for the new `DevEndpoint` to use.
    pub subnet_id: Option<String>,

    /// The public key to be used by this `DevEndpoint` for authentication.
    /// This attribute is provided for backward compatibility because the
    /// recommended attribute to use is public keys.
    pub public_key: Option<String>,

    /// A list of public keys to be used by the development endpoints for
    /// authentication.
    pub public_keys: Option<Vec<String>>,

    /// The number of Glue Data Processing Units (DPUs) to allocate to this
    /// `DevEndpoint`.
    pub number_of_nodes: Option<i32>,

    /// The type of predefined worker that is allocated to the development
    /// endpoint.
    pub worker_type: Option<WorkerType>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,

    /// The number of workers of a defined `workerType` that are allocated
    /// to the development endpoint.
    pub number_of_workers: Option<i32>,

    /// The paths to one or more Python libraries in an Amazon S3 bucket
    /// that should be loaded in your `DevEndpoint`. Multiple values must be
    /// complete paths separated by a comma.
    pub extra_python_libs_s3_path: Option<String>,

    /// The path to one or more Java `.jar` files in an S3 bucket that
    /// should be loaded in your `DevEndpoint`.
    pub extra_jars_s3_path: Option<String>,

    /// The name of the `SecurityConfiguration` structure to be used with
    /// this `DevEndpoint`.
    pub security_configuration: Option<String>,

    /// The tags to use with this `DevEndpoint`.
    pub tags: Option<HashMap<String, String>>,

    /// A map of arguments used to configure the `DevEndpoint`.
    pub arguments: Option<HashMap<String, String>>,
}

impl CreateDevEndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][CreateDevEndpointRequest::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }

    /// Sets the value of [role_arn][CreateDevEndpointRequest::role_arn].
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }

    /// Replaces the contents of [security_group_ids][CreateDevEndpointRequest::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [security_group_ids][CreateDevEndpointRequest::security_group_ids], creating the list if unset.
    pub fn add_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [subnet_id][CreateDevEndpointRequest::subnet_id].
    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    /// Sets the value of [public_key][CreateDevEndpointRequest::public_key].
    pub fn set_public_key<T: Into<String>>(mut self, v: T) -> Self {
        self.public_key = Some(v.into());
        self
    }

    /// Replaces the contents of [public_keys][CreateDevEndpointRequest::public_keys].
    pub fn set_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.public_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [public_keys][CreateDevEndpointRequest::public_keys], creating the list if unset.
    pub fn add_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.public_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [number_of_nodes][CreateDevEndpointRequest::number_of_nodes].
    pub fn set_number_of_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_nodes = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][CreateDevEndpointRequest::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][CreateDevEndpointRequest::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][CreateDevEndpointRequest::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [extra_python_libs_s3_path][CreateDevEndpointRequest::extra_python_libs_s3_path].
    pub fn set_extra_python_libs_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_python_libs_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [extra_jars_s3_path][CreateDevEndpointRequest::extra_jars_s3_path].
    pub fn set_extra_jars_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_jars_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][CreateDevEndpointRequest::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][CreateDevEndpointRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][CreateDevEndpointRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][CreateDevEndpointRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }

    /// Replaces the contents of [arguments][CreateDevEndpointRequest::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][CreateDevEndpointRequest::arguments], failing on a duplicate key.
    pub fn add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Arguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [arguments][CreateDevEndpointRequest::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }
}

/// Response message for `CreateDevEndpoint`.
///
/// The attributes of the new endpoint come back at the top level rather
/// than nested in a `DevEndpoint` value.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateDevEndpointResult {
    /// The name assigned to the new `DevEndpoint`.
    pub endpoint_name: Option<String>,

    /// The current status of the new `DevEndpoint`.
    pub status: Option<String>,

    /// The security groups assigned to the new `DevEndpoint`.
    pub security_group_ids: Option<Vec<String>>,

    /// The subnet ID assigned to the new `DevEndpoint`.
    pub subnet_id: Option<String>,

    /// The Amazon Resource Name (ARN) of the role assigned to the new
    /// `DevEndpoint`.
    pub role_arn: Option<String>,

    /// The address of the YARN endpoint used by this `DevEndpoint`.
    pub yarn_endpoint_address: Option<String>,

    /// The Apache Zeppelin port for the remote Apache Spark interpreter.
    pub zeppelin_remote_spark_interpreter_port: Option<i32>,

    /// The number of Glue Data Processing Units (DPUs) allocated to this
    /// `DevEndpoint`.
    pub number_of_nodes: Option<i32>,

    /// The type of predefined worker that is allocated to the development
    /// endpoint.
    pub worker_type: Option<WorkerType>,

    /// Glue version determines the versions of Apache Spark and Python
    /// that Glue supports.
    pub glue_version: Option<String>,

    /// The number of workers of a defined `workerType` that are allocated
    /// to the development endpoint.
    pub number_of_workers: Option<i32>,

    /// The Amazon Web Services Availability Zone where this `DevEndpoint`
    /// is located.
    pub availability_zone: Option<String>,

    /// The ID of the virtual private cloud (VPC) used by this
    /// `DevEndpoint`.
    pub vpc_id: Option<String>,

    /// The paths to one or more Python libraries in an S3 bucket that will
    /// be loaded in your `DevEndpoint`.
    pub extra_python_libs_s3_path: Option<String>,

    /// Path to one or more Java `.jar` files in an S3 bucket that will be
    /// loaded in your `DevEndpoint`.
    pub extra_jars_s3_path: Option<String>,

    /// The reason for a current failure in this `DevEndpoint`.
    pub failure_reason: Option<String>,

    /// The name of the `SecurityConfiguration` structure being used with
    /// this `DevEndpoint`.
    pub security_configuration: Option<String>,

    /// The point in time at which this `DevEndpoint` was created.
    pub created_timestamp: Option<wkt::Timestamp>,

    /// The map of arguments used to configure this `DevEndpoint`.
    pub arguments: Option<HashMap<String, String>>,
}

impl CreateDevEndpointResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][CreateDevEndpointResult::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }

    /// Sets the value of [status][CreateDevEndpointResult::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Replaces the contents of [security_group_ids][CreateDevEndpointResult::security_group_ids].
    pub fn set_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [security_group_ids][CreateDevEndpointResult::security_group_ids], creating the list if unset.
    pub fn add_security_group_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_group_ids
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [subnet_id][CreateDevEndpointResult::subnet_id].
    pub fn set_subnet_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subnet_id = Some(v.into());
        self
    }

    /// Sets the value of [role_arn][CreateDevEndpointResult::role_arn].
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }

    /// Sets the value of [yarn_endpoint_address][CreateDevEndpointResult::yarn_endpoint_address].
    pub fn set_yarn_endpoint_address<T: Into<String>>(mut self, v: T) -> Self {
        self.yarn_endpoint_address = Some(v.into());
        self
    }

    /// Sets the value of [zeppelin_remote_spark_interpreter_port][CreateDevEndpointResult::zeppelin_remote_spark_interpreter_port].
    pub fn set_zeppelin_remote_spark_interpreter_port<T: Into<i32>>(mut self, v: T) -> Self {
        self.zeppelin_remote_spark_interpreter_port = Some(v.into());
        self
    }

    /// Sets the value of [number_of_nodes][CreateDevEndpointResult::number_of_nodes].
    pub fn set_number_of_nodes<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_nodes = Some(v.into());
        self
    }

    /// Sets the value of [worker_type][CreateDevEndpointResult::worker_type].
    pub fn set_worker_type<T: Into<WorkerType>>(mut self, v: T) -> Self {
        self.worker_type = Some(v.into());
        self
    }

    /// Sets the value of [glue_version][CreateDevEndpointResult::glue_version].
    pub fn set_glue_version<T: Into<String>>(mut self, v: T) -> Self {
        self.glue_version = Some(v.into());
        self
    }

    /// Sets the value of [number_of_workers][CreateDevEndpointResult::number_of_workers].
    pub fn set_number_of_workers<T: Into<i32>>(mut self, v: T) -> Self {
        self.number_of_workers = Some(v.into());
        self
    }

    /// Sets the value of [availability_zone][CreateDevEndpointResult::availability_zone].
    pub fn set_availability_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.availability_zone = Some(v.into());
        self
    }

    /// Sets the value of [vpc_id][CreateDevEndpointResult::vpc_id].
    pub fn set_vpc_id<T: Into<String>>(mut self, v: T) -> Self {
        self.vpc_id = Some(v.into());
        self
    }

    /// Sets the value of [extra_python_libs_s3_path][CreateDevEndpointResult::extra_python_libs_s3_path].
    pub fn set_extra_python_libs_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_python_libs_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [extra_jars_s3_path][CreateDevEndpointResult::extra_jars_s3_path].
    pub fn set_extra_jars_s3_path<T: Into<String>>(mut self, v: T) -> Self {
        self.extra_jars_s3_path = Some(v.into());
        self
    }

    /// Sets the value of [failure_reason][CreateDevEndpointResult::failure_reason].
    pub fn set_failure_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.failure_reason = Some(v.into());
        self
    }

    /// Sets the value of [security_configuration][CreateDevEndpointResult::security_configuration].
    pub fn set_security_configuration<T: Into<String>>(mut self, v: T) -> Self {
        self.security_configuration = Some(v.into());
        self
    }

    /// Sets the value of [created_timestamp][CreateDevEndpointResult::created_timestamp].
    pub fn set_created_timestamp<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.created_timestamp = Some(v.into());
        self
    }

    /// Replaces the contents of [arguments][CreateDevEndpointResult::arguments].
    pub fn set_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [arguments][CreateDevEndpointResult::arguments], failing on a duplicate key.
    pub fn add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "Arguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [arguments][CreateDevEndpointResult::arguments] to unset.
    pub fn clear_arguments(mut self) -> Self {
        self.arguments = None;
        self
    }
}

/// Request message for `GetDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDevEndpointRequest {
    /// Name of the `DevEndpoint` to retrieve information for.
    pub endpoint_name: Option<String>,
}

impl GetDevEndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][GetDevEndpointRequest::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }
}

/// Response message for `GetDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDevEndpointResult {
    /// A `DevEndpoint` definition.
    pub dev_endpoint: Option<DevEndpoint>,
}

impl GetDevEndpointResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [dev_endpoint][GetDevEndpointResult::dev_endpoint].
    pub fn set_dev_endpoint<T: Into<DevEndpoint>>(mut self, v: T) -> Self {
        self.dev_endpoint = Some(v.into());
        self
    }
}

/// Request message for `GetDevEndpoints`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDevEndpointsRequest {
    /// The maximum size of information to return.
    pub max_results: Option<i32>,

    /// A continuation token, if this is a continuation call.
    pub next_token: Option<String>,
}

impl GetDevEndpointsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_results][GetDevEndpointsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetDevEndpointsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Response message for `GetDevEndpoints`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetDevEndpointsResult {
    /// A list of `DevEndpoint` definitions.
    pub dev_endpoints: Option<Vec<DevEndpoint>>,

    /// A continuation token, if not all `DevEndpoint` definitions have yet
    /// been returned.
    pub next_token: Option<String>,
}

impl GetDevEndpointsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [dev_endpoints][GetDevEndpointsResult::dev_endpoints].
    pub fn set_dev_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DevEndpoint>,
    {
        self.dev_endpoints = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dev_endpoints][GetDevEndpointsResult::dev_endpoints], creating the list if unset.
    pub fn add_dev_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DevEndpoint>,
    {
        self.dev_endpoints
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetDevEndpointsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `BatchGetDevEndpoints`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetDevEndpointsRequest {
    /// The list of `DevEndpoint` names, which might be the names returned
    /// from the `ListDevEndpoints` operation.
    pub dev_endpoint_names: Option<Vec<String>>,
}

impl BatchGetDevEndpointsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [dev_endpoint_names][BatchGetDevEndpointsRequest::dev_endpoint_names].
    pub fn set_dev_endpoint_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoint_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dev_endpoint_names][BatchGetDevEndpointsRequest::dev_endpoint_names], creating the list if unset.
    pub fn add_dev_endpoint_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoint_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Response message for `BatchGetDevEndpoints`.
///
/// Names that could not be resolved come back in
/// [dev_endpoints_not_found][BatchGetDevEndpointsResult::dev_endpoints_not_found]
/// rather than failing the whole request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct BatchGetDevEndpointsResult {
    /// A list of `DevEndpoint` definitions.
    pub dev_endpoints: Option<Vec<DevEndpoint>>,

    /// A list of `DevEndpoints` not found.
    pub dev_endpoints_not_found: Option<Vec<String>>,
}

impl BatchGetDevEndpointsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [dev_endpoints][BatchGetDevEndpointsResult::dev_endpoints].
    pub fn set_dev_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DevEndpoint>,
    {
        self.dev_endpoints = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dev_endpoints][BatchGetDevEndpointsResult::dev_endpoints], creating the list if unset.
    pub fn add_dev_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<DevEndpoint>,
    {
        self.dev_endpoints
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [dev_endpoints_not_found][BatchGetDevEndpointsResult::dev_endpoints_not_found].
    pub fn set_dev_endpoints_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoints_not_found = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dev_endpoints_not_found][BatchGetDevEndpointsResult::dev_endpoints_not_found], creating the list if unset.
    pub fn add_dev_endpoints_not_found<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoints_not_found
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }
}

/// Request message for `UpdateDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateDevEndpointRequest {
    /// The name of the `DevEndpoint` to be updated.
    pub endpoint_name: Option<String>,

    /// The public key for the `DevEndpoint` to use.
    pub public_key: Option<String>,

    /// The list of public keys for the `DevEndpoint` to use.
    pub add_public_keys: Option<Vec<String>>,

    /// The list of public keys to be deleted from the `DevEndpoint`.
    pub delete_public_keys: Option<Vec<String>>,

    /// Custom Python or Java libraries to be loaded in the `DevEndpoint`.
    pub custom_libraries: Option<DevEndpointCustomLibraries>,

    /// `True` if the list of custom libraries to be loaded in the
    /// development endpoint needs to be updated, or `False` if otherwise.
    pub update_etl_libraries: Option<bool>,

    /// The list of argument keys to be deleted from the map of arguments
    /// used to configure the `DevEndpoint`.
    pub delete_arguments: Option<Vec<String>>,

    /// The map of arguments to add the map of arguments used to configure
    /// the `DevEndpoint`.
    pub add_arguments: Option<HashMap<String, String>>,
}

impl UpdateDevEndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][UpdateDevEndpointRequest::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }

    /// Sets the value of [public_key][UpdateDevEndpointRequest::public_key].
    pub fn set_public_key<T: Into<String>>(mut self, v: T) -> Self {
        self.public_key = Some(v.into());
        self
    }

    /// Replaces the contents of [add_public_keys][UpdateDevEndpointRequest::add_public_keys].
    pub fn set_add_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.add_public_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [add_public_keys][UpdateDevEndpointRequest::add_public_keys], creating the list if unset.
    pub fn add_add_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.add_public_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [delete_public_keys][UpdateDevEndpointRequest::delete_public_keys].
    pub fn set_delete_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.delete_public_keys = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [delete_public_keys][UpdateDevEndpointRequest::delete_public_keys], creating the list if unset.
    pub fn add_delete_public_keys<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.delete_public_keys
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [custom_libraries][UpdateDevEndpointRequest::custom_libraries].
    pub fn set_custom_libraries<T: Into<DevEndpointCustomLibraries>>(mut self, v: T) -> Self {
        self.custom_libraries = Some(v.into());
        self
    }

    /// Sets the value of [update_etl_libraries][UpdateDevEndpointRequest::update_etl_libraries].
    pub fn set_update_etl_libraries<T: Into<bool>>(mut self, v: T) -> Self {
        self.update_etl_libraries = Some(v.into());
        self
    }

    /// Replaces the contents of [delete_arguments][UpdateDevEndpointRequest::delete_arguments].
    pub fn set_delete_arguments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.delete_arguments = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [delete_arguments][UpdateDevEndpointRequest::delete_arguments], creating the list if unset.
    pub fn add_delete_arguments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.delete_arguments
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Replaces the contents of [add_arguments][UpdateDevEndpointRequest::add_arguments].
    pub fn set_add_arguments<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.add_arguments = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [add_arguments][UpdateDevEndpointRequest::add_arguments], failing on a duplicate key.
    pub fn add_add_arguments_entry<K, V>(mut self, key: K, value: V) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let map = self.add_arguments.get_or_insert_with(HashMap::new);
        if map.contains_key(&key) {
            return Err(Error::invalid_argument(FieldViolation::DuplicateKey {
                field: "AddArguments",
                key,
            }));
        }
        map.insert(key, value.into());
        Ok(self)
    }

    /// Resets [add_arguments][UpdateDevEndpointRequest::add_arguments] to unset.
    pub fn clear_add_arguments(mut self) -> Self {
        self.add_arguments = None;
        self
    }
}

/// Response message for `UpdateDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateDevEndpointResult {}

impl UpdateDevEndpointResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `DeleteDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteDevEndpointRequest {
    /// The name of the `DevEndpoint`.
    pub endpoint_name: Option<String>,
}

impl DeleteDevEndpointRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [endpoint_name][DeleteDevEndpointRequest::endpoint_name].
    pub fn set_endpoint_name<T: Into<String>>(mut self, v: T) -> Self {
        self.endpoint_name = Some(v.into());
        self
    }
}

/// Response message for `DeleteDevEndpoint`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteDevEndpointResult {}

impl DeleteDevEndpointResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `ListDevEndpoints`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListDevEndpointsRequest {
    /// A continuation token, if this is a continuation request.
    pub next_token: Option<String>,

    /// The maximum size of a list to return.
    pub max_results: Option<i32>,

    /// Specifies to return only these tagged resources.
    pub tags: Option<HashMap<String, String>>,
}

impl ListDevEndpointsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [next_token][ListDevEndpointsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [max_results][ListDevEndpointsRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Replaces the contents of [tags][ListDevEndpointsRequest::tags].
    pub fn set_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Inserts one entry into [tags][ListDevEndpointsRequest::tags], failing on a duplicate key.
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

    /// Resets [tags][ListDevEndpointsRequest::tags] to unset.
    pub fn clear_tags(mut self) -> Self {
        self.tags = None;
        self
    }
}

/// Response message for `ListDevEndpoints`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ListDevEndpointsResult {
    /// The names of all the `DevEndpoints` in the account, or the
    /// `DevEndpoints` with the specified tags.
    pub dev_endpoint_names: Option<Vec<String>>,

    /// A continuation token, if the returned list does not contain the
    /// last metric available.
    pub next_token: Option<String>,
}

impl ListDevEndpointsResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [dev_endpoint_names][ListDevEndpointsResult::dev_endpoint_names].
    pub fn set_dev_endpoint_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoint_names = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [dev_endpoint_names][ListDevEndpointsResult::dev_endpoint_names], creating the list if unset.
    pub fn add_dev_endpoint_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.dev_endpoint_names
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][ListDevEndpointsResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}
