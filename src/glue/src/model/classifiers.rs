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

/// Indicates whether a CSV file contains a header row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CsvHeaderOption {
    Unknown,
    Present,
    Absent,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [CsvHeaderOption::as_str].
    UnknownValue(String),
}

impl CsvHeaderOption {
    /// Gets the wire representation of the value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Present => "PRESENT",
            Self::Absent => "ABSENT",
            Self::UnknownValue(v) => v.as_str(),
        }
    }
}

impl From<&str> for CsvHeaderOption {
    fn from(value: &str) -> Self {
        match value {
            "UNKNOWN" => Self::Unknown,
            "PRESENT" => Self::Present,
            "ABSENT" => Self::Absent,
            _ => Self::UnknownValue(value.to_string()),
        }
    }
}

impl std::fmt::Display for CsvHeaderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::ser::Serialize for CsvHeaderOption {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::de::Deserialize<'de> for CsvHeaderOption {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// A classifier that uses `grok` patterns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GrokClassifier {
    /// The name of the classifier.
    pub name: Option<String>,

    /// An identifier of the data format that the classifier matches, such
    /// as Twitter, JSON, Omniture logs, and so on.
    pub classification: Option<String>,

    /// The time that this classifier was registered.
    pub creation_time: Option<wkt::Timestamp>,

    /// The time that this classifier was last updated.
    pub last_updated: Option<wkt::Timestamp>,

    /// The version of this classifier.
    pub version: Option<i64>,

    /// The grok pattern applied to a data store by this classifier.
    ///
    /// Constraints: length 1-2048.
    pub grok_pattern: Option<String>,

    /// Optional custom grok patterns defined by this classifier.
    ///
    /// Constraints: length at most 16000.
    pub custom_patterns: Option<String>,
}

impl GrokClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GrokClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [classification][GrokClassifier::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][GrokClassifier::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated][GrokClassifier::last_updated].
    pub fn set_last_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated = Some(v.into());
        self
    }

    /// Sets the value of [version][GrokClassifier::version].
    pub fn set_version<T: Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [grok_pattern][GrokClassifier::grok_pattern].
    pub fn set_grok_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.grok_pattern = Some(v.into());
        self
    }

    /// Sets the value of [custom_patterns][GrokClassifier::custom_patterns].
    pub fn set_custom_patterns<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_patterns = Some(v.into());
        self
    }
}

/// A classifier for XML content.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct XmlClassifier {
    /// The name of the classifier.
    pub name: Option<String>,

    /// An identifier of the data format that the classifier matches.
    pub classification: Option<String>,

    /// The time that this classifier was registered.
    pub creation_time: Option<wkt::Timestamp>,

    /// The time that this classifier was last updated.
    pub last_updated: Option<wkt::Timestamp>,

    /// The version of this classifier.
    pub version: Option<i64>,

    /// The XML tag designating the element that contains each record in an
    /// XML document being parsed. This can't identify a self-closing
    /// element (closed by `/>`). An empty row element that contains only
    /// attributes can be parsed as long as it ends with a closing tag.
    pub row_tag: Option<String>,
}

impl XmlClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][XmlClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [classification][XmlClassifier::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][XmlClassifier::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated][XmlClassifier::last_updated].
    pub fn set_last_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated = Some(v.into());
        self
    }

    /// Sets the value of [version][XmlClassifier::version].
    pub fn set_version<T: Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [row_tag][XmlClassifier::row_tag].
    pub fn set_row_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.row_tag = Some(v.into());
        self
    }
}

/// A classifier for JSON content.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct JsonClassifier {
    /// The name of the classifier.
    pub name: Option<String>,

    /// The time that this classifier was registered.
    pub creation_time: Option<wkt::Timestamp>,

    /// The time that this classifier was last updated.
    pub last_updated: Option<wkt::Timestamp>,

    /// The version of this classifier.
    pub version: Option<i64>,

    /// A `JsonPath` string defining the JSON data for the classifier to
    /// classify. Glue supports a subset of `JsonPath`.
    pub json_path: Option<String>,
}

impl JsonClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][JsonClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][JsonClassifier::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated][JsonClassifier::last_updated].
    pub fn set_last_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated = Some(v.into());
        self
    }

    /// Sets the value of [version][JsonClassifier::version].
    pub fn set_version<T: Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [json_path][JsonClassifier::json_path].
    pub fn set_json_path<T: Into<String>>(mut self, v: T) -> Self {
        self.json_path = Some(v.into());
        self
    }
}

/// A classifier for custom CSV content.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CsvClassifier {
    /// The name of the classifier.
    pub name: Option<String>,

    /// The time that this classifier was registered.
    pub creation_time: Option<wkt::Timestamp>,

    /// The time that this classifier was last updated.
    pub last_updated: Option<wkt::Timestamp>,

    /// The version of this classifier.
    pub version: Option<i64>,

    /// A custom symbol to denote what separates each column entry in the
    /// row.
    ///
    /// Constraints: a single character other than the quote symbol.
    pub delimiter: Option<String>,

    /// A custom symbol to denote what combines content into a single column
    /// value. It must be different from the column delimiter.
    pub quote_symbol: Option<String>,

    /// Indicates whether the CSV file contains a header.
    pub contains_header: Option<CsvHeaderOption>,

    /// A list of strings representing column names.
    pub header: Option<Vec<String>>,

    /// Specifies not to trim values before identifying the type of column
    /// values. The default value is `true`.
    pub disable_value_trimming: Option<bool>,

    /// Enables the processing of files that contain only one column.
    pub allow_single_column: Option<bool>,
}

impl CsvClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CsvClassifier::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [creation_time][CsvClassifier::creation_time].
    pub fn set_creation_time<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.creation_time = Some(v.into());
        self
    }

    /// Sets the value of [last_updated][CsvClassifier::last_updated].
    pub fn set_last_updated<T: Into<wkt::Timestamp>>(mut self, v: T) -> Self {
        self.last_updated = Some(v.into());
        self
    }

    /// Sets the value of [version][CsvClassifier::version].
    pub fn set_version<T: Into<i64>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets the value of [delimiter][CsvClassifier::delimiter].
    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    /// Sets the value of [quote_symbol][CsvClassifier::quote_symbol].
    pub fn set_quote_symbol<T: Into<String>>(mut self, v: T) -> Self {
        self.quote_symbol = Some(v.into());
        self
    }

    /// Sets the value of [contains_header][CsvClassifier::contains_header].
    pub fn set_contains_header<T: Into<CsvHeaderOption>>(mut self, v: T) -> Self {
        self.contains_header = Some(v.into());
        self
    }

    /// Replaces the contents of [header][CsvClassifier::header].
    pub fn set_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [header][CsvClassifier::header], creating the list if unset.
    pub fn add_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [disable_value_trimming][CsvClassifier::disable_value_trimming].
    pub fn set_disable_value_trimming<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_value_trimming = Some(v.into());
        self
    }

    /// Sets the value of [allow_single_column][CsvClassifier::allow_single_column].
    pub fn set_allow_single_column<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_single_column = Some(v.into());
        self
    }
}

/// Classifiers are triggered during a crawl task. A classifier checks
/// whether a given file is in a format it can handle. If it is, the
/// classifier creates a schema in the form of a `StructType` object that
/// matches that data format.
///
/// At most one of the classifier fields is set in any instance.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct Classifier {
    /// A classifier that uses `grok`.
    pub grok_classifier: Option<GrokClassifier>,

    /// A classifier for XML content.
    #[serde(rename = "XMLClassifier")]
    pub xml_classifier: Option<XmlClassifier>,

    /// A classifier for JSON content.
    pub json_classifier: Option<JsonClassifier>,

    /// A classifier for comma-separated values (CSV).
    pub csv_classifier: Option<CsvClassifier>,
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [grok_classifier][Classifier::grok_classifier].
    pub fn set_grok_classifier<T: Into<GrokClassifier>>(mut self, v: T) -> Self {
        self.grok_classifier = Some(v.into());
        self
    }

    /// Sets the value of [xml_classifier][Classifier::xml_classifier].
    pub fn set_xml_classifier<T: Into<XmlClassifier>>(mut self, v: T) -> Self {
        self.xml_classifier = Some(v.into());
        self
    }

    /// Sets the value of [json_classifier][Classifier::json_classifier].
    pub fn set_json_classifier<T: Into<JsonClassifier>>(mut self, v: T) -> Self {
        self.json_classifier = Some(v.into());
        self
    }

    /// Sets the value of [csv_classifier][Classifier::csv_classifier].
    pub fn set_csv_classifier<T: Into<CsvClassifier>>(mut self, v: T) -> Self {
        self.csv_classifier = Some(v.into());
        self
    }
}

/// Specifies a `grok` classifier for `CreateClassifier` to create.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateGrokClassifierRequest {
    /// An identifier of the data format that the classifier matches, such
    /// as Twitter, JSON, Omniture logs, Amazon CloudWatch Logs, and so on.
    pub classification: Option<String>,

    /// The name of the new classifier.
    pub name: Option<String>,

    /// The grok pattern used by this classifier.
    pub grok_pattern: Option<String>,

    /// Optional custom grok patterns used by this classifier.
    pub custom_patterns: Option<String>,
}

impl CreateGrokClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [classification][CreateGrokClassifierRequest::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [name][CreateGrokClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [grok_pattern][CreateGrokClassifierRequest::grok_pattern].
    pub fn set_grok_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.grok_pattern = Some(v.into());
        self
    }

    /// Sets the value of [custom_patterns][CreateGrokClassifierRequest::custom_patterns].
    pub fn set_custom_patterns<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_patterns = Some(v.into());
        self
    }
}

/// Specifies an XML classifier for `CreateClassifier` to create.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateXmlClassifierRequest {
    /// An identifier of the data format that the classifier matches.
    pub classification: Option<String>,

    /// The name of the classifier.
    pub name: Option<String>,

    /// The XML tag designating the element that contains each record in an
    /// XML document being parsed. This can't identify a self-closing
    /// element (closed by `/>`).
    pub row_tag: Option<String>,
}

impl CreateXmlClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [classification][CreateXmlClassifierRequest::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [name][CreateXmlClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [row_tag][CreateXmlClassifierRequest::row_tag].
    pub fn set_row_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.row_tag = Some(v.into());
        self
    }
}

/// Specifies a JSON classifier for `CreateClassifier` to create.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateJsonClassifierRequest {
    /// The name of the classifier.
    pub name: Option<String>,

    /// A `JsonPath` string defining the JSON data for the classifier to
    /// classify. Glue supports a subset of `JsonPath`.
    pub json_path: Option<String>,
}

impl CreateJsonClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateJsonClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [json_path][CreateJsonClassifierRequest::json_path].
    pub fn set_json_path<T: Into<String>>(mut self, v: T) -> Self {
        self.json_path = Some(v.into());
        self
    }
}

/// Specifies a custom CSV classifier for `CreateClassifier` to create.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateCsvClassifierRequest {
    /// The name of the classifier.
    pub name: Option<String>,

    /// A custom symbol to denote what separates each column entry in the
    /// row.
    pub delimiter: Option<String>,

    /// A custom symbol to denote what combines content into a single column
    /// value. Must be different from the column delimiter.
    pub quote_symbol: Option<String>,

    /// Indicates whether the CSV file contains a header.
    pub contains_header: Option<CsvHeaderOption>,

    /// A list of strings representing column names.
    pub header: Option<Vec<String>>,

    /// Specifies not to trim values before identifying the type of column
    /// values. The default value is `true`.
    pub disable_value_trimming: Option<bool>,

    /// Enables the processing of files that contain only one column.
    pub allow_single_column: Option<bool>,
}

impl CreateCsvClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][CreateCsvClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [delimiter][CreateCsvClassifierRequest::delimiter].
    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    /// Sets the value of [quote_symbol][CreateCsvClassifierRequest::quote_symbol].
    pub fn set_quote_symbol<T: Into<String>>(mut self, v: T) -> Self {
        self.quote_symbol = Some(v.into());
        self
    }

    /// Sets the value of [contains_header][CreateCsvClassifierRequest::contains_header].
    pub fn set_contains_header<T: Into<CsvHeaderOption>>(mut self, v: T) -> Self {
        self.contains_header = Some(v.into());
        self
    }

    /// Replaces the contents of [header][CreateCsvClassifierRequest::header].
    pub fn set_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [header][CreateCsvClassifierRequest::header], creating the list if unset.
    pub fn add_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [disable_value_trimming][CreateCsvClassifierRequest::disable_value_trimming].
    pub fn set_disable_value_trimming<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_value_trimming = Some(v.into());
        self
    }

    /// Sets the value of [allow_single_column][CreateCsvClassifierRequest::allow_single_column].
    pub fn set_allow_single_column<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_single_column = Some(v.into());
        self
    }
}

/// Request message for `CreateClassifier`.
///
/// Exactly one of the nested classifier fields should be set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateClassifierRequest {
    /// A `GrokClassifier` object specifying the classifier to create.
    pub grok_classifier: Option<CreateGrokClassifierRequest>,

    /// An `XMLClassifier` object specifying the classifier to create.
    #[serde(rename = "XMLClassifier")]
    pub xml_classifier: Option<CreateXmlClassifierRequest>,

    /// A `JsonClassifier` object specifying the classifier to create.
    pub json_classifier: Option<CreateJsonClassifierRequest>,

    /// A `CsvClassifier` object specifying the classifier to create.
    pub csv_classifier: Option<CreateCsvClassifierRequest>,
}

impl CreateClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [grok_classifier][CreateClassifierRequest::grok_classifier].
    pub fn set_grok_classifier<T: Into<CreateGrokClassifierRequest>>(mut self, v: T) -> Self {
        self.grok_classifier = Some(v.into());
        self
    }

    /// Sets the value of [xml_classifier][CreateClassifierRequest::xml_classifier].
    pub fn set_xml_classifier<T: Into<CreateXmlClassifierRequest>>(mut self, v: T) -> Self {
        self.xml_classifier = Some(v.into());
        self
    }

    /// Sets the value of [json_classifier][CreateClassifierRequest::json_classifier].
    pub fn set_json_classifier<T: Into<CreateJsonClassifierRequest>>(mut self, v: T) -> Self {
        self.json_classifier = Some(v.into());
        self
    }

    /// Sets the value of [csv_classifier][CreateClassifierRequest::csv_classifier].
    pub fn set_csv_classifier<T: Into<CreateCsvClassifierRequest>>(mut self, v: T) -> Self {
        self.csv_classifier = Some(v.into());
        self
    }
}

/// Response message for `CreateClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateClassifierResult {}

impl CreateClassifierResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Specifies a grok classifier to update when passed to
/// `UpdateClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateGrokClassifierRequest {
    /// The name of the `GrokClassifier`.
    pub name: Option<String>,

    /// An identifier of the data format that the classifier matches.
    pub classification: Option<String>,

    /// The grok pattern used by this classifier.
    pub grok_pattern: Option<String>,

    /// Optional custom grok patterns used by this classifier.
    pub custom_patterns: Option<String>,
}

impl UpdateGrokClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateGrokClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [classification][UpdateGrokClassifierRequest::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [grok_pattern][UpdateGrokClassifierRequest::grok_pattern].
    pub fn set_grok_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.grok_pattern = Some(v.into());
        self
    }

    /// Sets the value of [custom_patterns][UpdateGrokClassifierRequest::custom_patterns].
    pub fn set_custom_patterns<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_patterns = Some(v.into());
        self
    }
}

/// Specifies an XML classifier to be updated.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateXmlClassifierRequest {
    /// The name of the classifier.
    pub name: Option<String>,

    /// An identifier of the data format that the classifier matches.
    pub classification: Option<String>,

    /// The XML tag designating the element that contains each record in an
    /// XML document being parsed.
    pub row_tag: Option<String>,
}

impl UpdateXmlClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateXmlClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [classification][UpdateXmlClassifierRequest::classification].
    pub fn set_classification<T: Into<String>>(mut self, v: T) -> Self {
        self.classification = Some(v.into());
        self
    }

    /// Sets the value of [row_tag][UpdateXmlClassifierRequest::row_tag].
    pub fn set_row_tag<T: Into<String>>(mut self, v: T) -> Self {
        self.row_tag = Some(v.into());
        self
    }
}

/// Specifies a JSON classifier to be updated.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateJsonClassifierRequest {
    /// The name of the classifier.
    pub name: Option<String>,

    /// A `JsonPath` string defining the JSON data for the classifier to
    /// classify.
    pub json_path: Option<String>,
}

impl UpdateJsonClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateJsonClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [json_path][UpdateJsonClassifierRequest::json_path].
    pub fn set_json_path<T: Into<String>>(mut self, v: T) -> Self {
        self.json_path = Some(v.into());
        self
    }
}

/// Specifies a custom CSV classifier to be updated.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateCsvClassifierRequest {
    /// The name of the classifier.
    pub name: Option<String>,

    /// A custom symbol to denote what separates each column entry in the
    /// row.
    pub delimiter: Option<String>,

    /// A custom symbol to denote what combines content into a single column
    /// value. Must be different from the column delimiter.
    pub quote_symbol: Option<String>,

    /// Indicates whether the CSV file contains a header.
    pub contains_header: Option<CsvHeaderOption>,

    /// A list of strings representing column names.
    pub header: Option<Vec<String>>,

    /// Specifies not to trim values before identifying the type of column
    /// values. The default value is `true`.
    pub disable_value_trimming: Option<bool>,

    /// Enables the processing of files that contain only one column.
    pub allow_single_column: Option<bool>,
}

impl UpdateCsvClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][UpdateCsvClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [delimiter][UpdateCsvClassifierRequest::delimiter].
    pub fn set_delimiter<T: Into<String>>(mut self, v: T) -> Self {
        self.delimiter = Some(v.into());
        self
    }

    /// Sets the value of [quote_symbol][UpdateCsvClassifierRequest::quote_symbol].
    pub fn set_quote_symbol<T: Into<String>>(mut self, v: T) -> Self {
        self.quote_symbol = Some(v.into());
        self
    }

    /// Sets the value of [contains_header][UpdateCsvClassifierRequest::contains_header].
    pub fn set_contains_header<T: Into<CsvHeaderOption>>(mut self, v: T) -> Self {
        self.contains_header = Some(v.into());
        self
    }

    /// Replaces the contents of [header][UpdateCsvClassifierRequest::header].
    pub fn set_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [header][UpdateCsvClassifierRequest::header], creating the list if unset.
    pub fn add_header<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.header
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [disable_value_trimming][UpdateCsvClassifierRequest::disable_value_trimming].
    pub fn set_disable_value_trimming<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_value_trimming = Some(v.into());
        self
    }

    /// Sets the value of [allow_single_column][UpdateCsvClassifierRequest::allow_single_column].
    pub fn set_allow_single_column<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_single_column = Some(v.into());
        self
    }
}

/// Request message for `UpdateClassifier`.
///
/// Exactly one of the nested classifier fields should be set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateClassifierRequest {
    /// A `GrokClassifier` object with updated fields.
    pub grok_classifier: Option<UpdateGrokClassifierRequest>,

    /// An `XMLClassifier` object with updated fields.
    #[serde(rename = "XMLClassifier")]
    pub xml_classifier: Option<UpdateXmlClassifierRequest>,

    /// A `JsonClassifier` object with updated fields.
    pub json_classifier: Option<UpdateJsonClassifierRequest>,

    /// A `CsvClassifier` object with updated fields.
    pub csv_classifier: Option<UpdateCsvClassifierRequest>,
}

impl UpdateClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [grok_classifier][UpdateClassifierRequest::grok_classifier].
    pub fn set_grok_classifier<T: Into<UpdateGrokClassifierRequest>>(mut self, v: T) -> Self {
        self.grok_classifier = Some(v.into());
        self
    }

    /// Sets the value of [xml_classifier][UpdateClassifierRequest::xml_classifier].
    pub fn set_xml_classifier<T: Into<UpdateXmlClassifierRequest>>(mut self, v: T) -> Self {
        self.xml_classifier = Some(v.into());
        self
    }

    /// Sets the value of [json_classifier][UpdateClassifierRequest::json_classifier].
    pub fn set_json_classifier<T: Into<UpdateJsonClassifierRequest>>(mut self, v: T) -> Self {
        self.json_classifier = Some(v.into());
        self
    }

    /// Sets the value of [csv_classifier][UpdateClassifierRequest::csv_classifier].
    pub fn set_csv_classifier<T: Into<UpdateCsvClassifierRequest>>(mut self, v: T) -> Self {
        self.csv_classifier = Some(v.into());
        self
    }
}

/// Response message for `UpdateClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct UpdateClassifierResult {}

impl UpdateClassifierResult {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Request message for `GetClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetClassifierRequest {
    /// Name of the classifier to retrieve.
    pub name: Option<String>,
}

impl GetClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][GetClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `GetClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetClassifierResult {
    /// The requested classifier.
    pub classifier: Option<Classifier>,
}

impl GetClassifierResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [classifier][GetClassifierResult::classifier].
    pub fn set_classifier<T: Into<Classifier>>(mut self, v: T) -> Self {
        self.classifier = Some(v.into());
        self
    }
}

/// Request message for `GetClassifiers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetClassifiersRequest {
    /// The size of the list to return.
    pub max_results: Option<i32>,

    /// An optional continuation token.
    pub next_token: Option<String>,
}

impl GetClassifiersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [max_results][GetClassifiersRequest::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = Some(v.into());
        self
    }

    /// Sets the value of [next_token][GetClassifiersRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Response message for `GetClassifiers`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct GetClassifiersResult {
    /// The requested list of classifier objects.
    pub classifiers: Option<Vec<Classifier>>,

    /// A continuation token.
    pub next_token: Option<String>,
}

impl GetClassifiersResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of [classifiers][GetClassifiersResult::classifiers].
    pub fn set_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Classifier>,
    {
        self.classifiers = Some(v.into_iter().map(|x| x.into()).collect());
        self
    }

    /// Appends to [classifiers][GetClassifiersResult::classifiers], creating the list if unset.
    pub fn add_classifiers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Classifier>,
    {
        self.classifiers
            .get_or_insert_with(Vec::new)
            .extend(v.into_iter().map(|x| x.into()));
        self
    }

    /// Sets the value of [next_token][GetClassifiersResult::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

/// Request message for `DeleteClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteClassifierRequest {
    /// Name of the classifier to remove.
    pub name: Option<String>,
}

impl DeleteClassifierRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][DeleteClassifierRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// Response message for `DeleteClassifier`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteClassifierResult {}

impl DeleteClassifierResult {
    pub fn new() -> Self {
        Self::default()
    }
}
