use serde_json::Value;

use crate::Error;

fn field<'a>(value: &'a Value, name: &'static str) -> Result<&'a Value, Error> {
    value.get(name).ok_or(Error::MissingField(name))
}

/// one substance detail record, the first entry of the document's
/// `PC_Substances` sequence
pub struct SubstanceRecord {
    root: Value,
}

impl SubstanceRecord {
    /// parse the detail endpoint body. `Ok(None)` means the document parsed
    /// but is empty, which the fetch loop skips without reporting; a
    /// nonempty document missing `PC_Substances[0]` is a fault
    pub fn parse(body: &str) -> Result<Option<Self>, Error> {
        let doc: Value = serde_json::from_str(body)?;
        let empty = match &doc {
            Value::Object(map) => map.is_empty(),
            Value::Array(entries) => entries.is_empty(),
            _ => false,
        };
        if empty {
            return Ok(None);
        }
        let root = field(&doc, "PC_Substances")?
            .get(0)
            .ok_or(Error::MissingField("PC_Substances[0]"))?
            .clone();
        Ok(Some(Self { root }))
    }

    /// the depositor's own identifier for this substance, read from
    /// `source.db.source_id.str`. for DTP.NCI this is the bare NSC number
    pub fn source_id(&self) -> Result<&str, Error> {
        field(
            field(field(field(&self.root, "source")?, "db")?, "source_id")?,
            "str",
        )?
        .as_str()
        .ok_or(Error::MissingField("source.db.source_id.str"))
    }

    /// CIDs of every compound entry tagged `standardized`, in sequence
    /// order. the whole sequence is scanned; records normally carry exactly
    /// one such entry but nothing enforces that
    pub fn standardized_cids(&self) -> Result<Vec<u64>, Error> {
        let compounds = field(&self.root, "compound")?
            .as_array()
            .ok_or(Error::MissingField("compound"))?;
        let mut cids = Vec::new();
        for entry in compounds {
            let id = field(entry, "id")?;
            let typ = field(id, "type")?;
            if typ.as_str() == Some("standardized") {
                let cid = field(field(id, "id")?, "cid")?
                    .as_u64()
                    .ok_or(Error::MissingField("compound.id.id.cid"))?;
                cids.push(cid);
            }
        }
        Ok(cids)
    }
}

#[cfg(test)]
mod tests {
    use super::SubstanceRecord;
    use crate::Error;

    fn detail(source_id: &str, compounds: &str) -> String {
        format!(
            r#"{{"PC_Substances": [{{
                "source": {{"db": {{"name": "DTP.NCI",
                            "source_id": {{"str": "{source_id}"}}}}}},
                "compound": [{compounds}]
            }}]}}"#
        )
    }

    #[test]
    fn full_record() {
        let body = detail(
            "12345",
            r#"{"id": {"type": "deposited"}},
               {"id": {"type": "standardized", "id": {"cid": 999}}}"#,
        );
        let record = SubstanceRecord::parse(&body).unwrap().unwrap();
        assert_eq!(record.source_id().unwrap(), "12345");
        assert_eq!(record.standardized_cids().unwrap(), vec![999]);
    }

    #[test]
    fn multiple_standardized_entries_in_order() {
        let body = detail(
            "7",
            r#"{"id": {"type": "standardized", "id": {"cid": 1}}},
               {"id": {"type": "deposited"}},
               {"id": {"type": "standardized", "id": {"cid": 2}}}"#,
        );
        let record = SubstanceRecord::parse(&body).unwrap().unwrap();
        assert_eq!(record.standardized_cids().unwrap(), vec![1, 2]);
    }

    #[test]
    fn no_standardized_entries() {
        let body = detail("7", r#"{"id": {"type": "deposited"}}"#);
        let record = SubstanceRecord::parse(&body).unwrap().unwrap();
        assert!(record.standardized_cids().unwrap().is_empty());
    }

    #[test]
    fn empty_document_skips() {
        assert!(SubstanceRecord::parse("{}").unwrap().is_none());
        assert!(SubstanceRecord::parse("[]").unwrap().is_none());
    }

    #[test]
    fn nonempty_document_without_substances_faults() {
        let got = SubstanceRecord::parse(r#"{"Fault": "no such SID"}"#);
        assert!(matches!(got, Err(Error::MissingField("PC_Substances"))));
    }

    #[test]
    fn unparsable_body_faults() {
        assert!(matches!(
            SubstanceRecord::parse("<html>billing page</html>"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn missing_source_id_faults() {
        let body = r#"{"PC_Substances": [{"source": {"db": {}}, "compound": []}]}"#;
        let record = SubstanceRecord::parse(body).unwrap().unwrap();
        assert!(matches!(
            record.source_id(),
            Err(Error::MissingField("source_id"))
        ));
    }

    #[test]
    fn non_integer_cid_faults() {
        let body = detail(
            "7",
            r#"{"id": {"type": "standardized", "id": {"cid": "999"}}}"#,
        );
        let record = SubstanceRecord::parse(&body).unwrap().unwrap();
        assert!(record.standardized_cids().is_err());
    }
}
