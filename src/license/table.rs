//! Caller-supplied license vocabularies.

use std::collections::HashMap;
use std::io::Read;

use super::LicenseLookup;
use crate::error::LicenseError;

/// An immutable code → URI map loaded once and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseTable {
    vocabulary: String,
    entries: HashMap<String, String>,
}

impl LicenseTable {
    pub fn from_pairs<I, K, V>(vocabulary: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LicenseTable {
            vocabulary: vocabulary.into(),
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Loads a flat JSON object of `{"code": "uri"}`.
    pub fn from_json_reader<R: Read>(vocabulary: impl Into<String>, mut reader: R) -> Result<Self, LicenseError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw).map_err(|e| LicenseError::Table(e.to_string()))?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|e| LicenseError::Table(e.to_string()))?;
        if let Some((code, _)) = entries.iter().find(|(_, uri)| uri.trim().is_empty()) {
            return Err(LicenseError::Table(format!("Blank URI for code {code:?}")));
        }
        Ok(LicenseTable { vocabulary: vocabulary.into(), entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LicenseLookup for LicenseTable {
    fn vocabulary(&self) -> &str {
        &self.vocabulary
    }

    fn lookup(&self, code: &str) -> Result<String, LicenseError> {
        self.entries.get(code).cloned().ok_or_else(|| LicenseError::UnknownCode {
            vocabulary: self.vocabulary.clone(),
            code: code.to_string(),
        })
    }
}
