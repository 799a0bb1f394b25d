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

/// An opaque byte sequence.
///
/// # JSON Mapping
///
/// On the wire the AWS JSON protocol encodes binary payloads as base64
/// strings. The in-memory representation is a [bytes::Bytes] buffer, so
/// cloning a blob never copies the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Blob(bytes::Bytes);

impl Blob {
    /// Creates a new [Blob] from anything convertible into a byte buffer.
    pub fn new<T: Into<bytes::Bytes>>(v: T) -> Self {
        Self(v.into())
    }

    /// The payload as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the blob, returning the underlying buffer.
    pub fn into_bytes(self) -> bytes::Bytes {
        self.0
    }
}

impl From<Vec<u8>> for Blob {
    fn from(v: Vec<u8>) -> Self {
        Self(v.into())
    }
}

impl From<bytes::Bytes> for Blob {
    fn from(v: bytes::Bytes) -> Self {
        Self(v)
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::ser::Serialize for Blob {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serde_with::As::<serde_with::base64::Base64>::serialize(&self.0, serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Blob {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_with::As::<serde_with::base64::Base64>::deserialize(deserializer).map(Blob)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrip() {
        let blob = Blob::new(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        let got = serde_json::to_value(&blob).unwrap();
        assert_eq!(got, json!("3q2+7w=="));
        let roundtrip = serde_json::from_value::<Blob>(got).unwrap();
        assert_eq!(blob, roundtrip);
    }

    #[test]
    fn empty() {
        let blob = Blob::default();
        let got = serde_json::to_value(&blob).unwrap();
        assert_eq!(got, json!(""));
        assert_eq!(serde_json::from_value::<Blob>(got).unwrap(), blob);
    }

    #[test]
    fn cheap_clone_shares_storage() {
        let blob = Blob::new(vec![1u8, 2, 3]);
        let copy = blob.clone();
        assert_eq!(blob.as_slice(), copy.as_slice());
        assert_eq!(blob.into_bytes().as_ptr(), copy.into_bytes().as_ptr());
    }
}
