//! Creative Commons vocabulary (3.0 legal codes, plus CC0 and the public domain mark).

use super::LicenseLookup;
use crate::error::LicenseError;

const TERMS: &[(&str, &str)] = &[
    ("by", "https://creativecommons.org/licenses/by/3.0/legalcode"),
    ("by-sa", "https://creativecommons.org/licenses/by-sa/3.0/legalcode"),
    ("by-nd", "https://creativecommons.org/licenses/by-nd/3.0/legalcode"),
    ("by-nc", "https://creativecommons.org/licenses/by-nc/3.0/legalcode"),
    ("by-nc-sa", "https://creativecommons.org/licenses/by-nc-sa/3.0/legalcode"),
    ("by-nc-nd", "https://creativecommons.org/licenses/by-nc-nd/3.0/legalcode"),
    ("cc0", "https://creativecommons.org/publicdomain/zero/1.0/legalcode"),
    ("pdm", "https://creativecommons.org/publicdomain/mark/1.0/"),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct CreativeCommons;

impl LicenseLookup for CreativeCommons {
    fn vocabulary(&self) -> &str {
        "creative-commons"
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
