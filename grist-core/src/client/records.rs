//! # Records
//!
//! See <https://support.getgrist.com/api/#tag/records>
//!
//! Record fields are [`CellValue`](crate::cell::CellValue)s. A field that the server sends in a
//! shape the cell codec does not recognise fails the whole call with
//! [`RequestError::Decode`]; it is never replaced by `null` or dropped.
use super::{GristClient, Records, RequestError, require_non_empty};
use crate::transport::Transport;
use http::Method;

impl<T> GristClient<T>
where
    T: Transport,
{
    pub async fn list_records(&self, doc_id: &str, table_id: &str) -> Result<Records, RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("table id", table_id)?;
        self.fetch(
            Method::GET,
            self.url(&["docs", doc_id, "tables", table_id, "records"]),
        )
        .await
    }

    /// Adds records to a table and returns them with their new ids (and no fields).
    pub async fn create_records(
        &self,
        doc_id: &str,
        table_id: &str,
        records: &Records,
    ) -> Result<Records, RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("table id", table_id)?;
        require_records(records)?;
        self.exchange(
            Method::POST,
            self.url(&["docs", doc_id, "tables", table_id, "records"]),
            records,
        )
        .await
    }

    /// Updates existing records. Every record must carry its id.
    pub async fn update_records(
        &self,
        doc_id: &str,
        table_id: &str,
        records: &Records,
    ) -> Result<(), RequestError> {
        require_non_empty("document id", doc_id)?;
        require_non_empty("table id", table_id)?;
        require_records(records)?;
        if let Some(pos) = records.records.iter().position(|r| r.id.is_none()) {
            return Err(RequestError::InvalidArgument(format!(
                "record at position {pos} has no id"
            )));
        }
        self.send(
            Method::PATCH,
            self.url(&["docs", doc_id, "tables", table_id, "records"]),
            Some(records),
        )
        .await?;
        Ok(())
    }
}

fn require_records(records: &Records) -> Result<(), RequestError> {
    if records.records.is_empty() {
        return Err(RequestError::InvalidArgument(
            "at least one record is required".to_string(),
        ));
    }
    Ok(())
}
