use std::io::Write;

use log::{debug, info, trace};

use crate::client::Fetch;
use crate::config::Config;
use crate::record::SubstanceRecord;
use crate::Error;

/// walks every substance the configured depositor has submitted and writes
/// one `"<property> <nscid>"` line per standardized compound entry
pub struct RecordFetcher<'a, F> {
    client: &'a F,
    config: &'a Config,
}

impl<'a, F: Fetch> RecordFetcher<'a, F> {
    pub fn new(client: &'a F, config: &'a Config) -> Self {
        Self { client, config }
    }

    /// run the pipeline to completion, returning the number of pairs
    /// emitted. SIDs are resolved strictly in listing order, one at a time.
    /// a fault resolving one SID writes that SID's detail URL to `err` (no
    /// newline, matching the original stream format) and moves on; only a
    /// failure of the bulk listing itself, or of a write to `err`, aborts
    /// the run
    pub fn run(
        &self,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<usize, Error> {
        let sids_url = self.config.sids_url();
        trace!("fetching bulk listing from {sids_url}");
        let listing = self.client.fetch(&sids_url)?;

        let mut emitted = 0;
        // split strictly on '\n': a trailing newline yields one final blank
        // line, which is looked up like any other SID and faults
        for line in listing.split('\n') {
            let sid = line.trim();
            match self.resolve(sid, out) {
                Ok(n) => emitted += n,
                Err(e) => {
                    debug!("sid {sid} failed: {e}");
                    write!(err, "{}", self.config.sid_url(sid))?;
                }
            }
        }
        info!("emitted {emitted} pairs");
        Ok(emitted)
    }

    /// resolve one SID: detail fetch, cross-reference derivation, then one
    /// property fetch and output line per standardized entry. any `Err`
    /// from here, including output write failures, is this SID's fault
    fn resolve(&self, sid: &str, out: &mut impl Write) -> Result<usize, Error> {
        let body = self.client.fetch(&self.config.sid_url(sid))?;
        let Some(record) = SubstanceRecord::parse(&body)? else {
            trace!("empty record for sid {sid}, skipping");
            return Ok(0);
        };
        let nscid = format!("NSC{}", record.source_id()?);
        let mut emitted = 0;
        for cid in record.standardized_cids()? {
            let property = self.client.fetch(&self.config.property_url(cid))?;
            writeln!(out, "{} {}", property.trim(), nscid)?;
            emitted += 1;
        }
        Ok(emitted)
    }
}
