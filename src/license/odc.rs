//! Open Data Commons vocabulary.

use super::LicenseLookup;
use crate::error::LicenseError;

const TERMS: &[(&str, &str)] = &[
    ("odc-by", "https://opendatacommons.org/licenses/by/1-0/"),
    ("odc-odbl", "https://opendatacommons.org/licenses/odbl/1-0/"),
    ("pddl", "https://opendatacommons.org/licenses/pddl/1-0/"),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenDataCommons;

impl LicenseLookup for OpenDataCommons {
    fn vocabulary(&self) -> &str {
        "open-data-commons"
    }

    fn lookup(&self, code: &str) -> Result<String, LicenseError> {
        TERMS
            .iter()
            .find(|(term, _)| *term == code)
            .map(|(_, uri)| uri.to_string())
            .ok_or_else(|| LicenseError::UnknownCode {
                vocabulary: self.vocabulary().to_string(),
                code: code.to_string(),
            })
    }
}
