use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the PUG REST service, without a trailing slash.
    pub base_url: String,

    /// The depositor source whose substances to list, as PubChem names it.
    pub source: String,

    /// The compound property to retrieve for each standardized CID.
    pub property: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".to_owned(),
            source: "DTP.NCI".to_owned(),
            property: "IsomericSMILES".to_owned(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Self {
        toml::from_str(&read_to_string(path).unwrap()).unwrap()
    }

    /// bulk listing of every SID deposited by `source`, newline-delimited
    pub fn sids_url(&self) -> String {
        format!("{}/substance/sourceall/{}/sids/TXT", self.base_url, self.source)
    }

    /// detail record for one SID. also the text written to the error sink
    /// when that SID's resolution faults
    pub fn sid_url(&self, sid: &str) -> String {
        format!("{}/substance/sid/{}/JSON", self.base_url, sid)
    }

    /// one-line property value for a CID
    pub fn property_url(&self, cid: u64) -> String {
        format!(
            "{}/compound/cid/{}/property/{}/TXT",
            self.base_url, cid, self.property
        )
    }
}
