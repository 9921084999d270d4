use serde::{Deserialize, Serialize};

use crate::types::{PageName, TriggerId};

/// Number of items the host holds for a page, or for one trigger of a page
/// when `trigger_id` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountRecord {
    pub page_name: PageName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_id: Option<TriggerId>,
    pub count: u32,
}

impl CountRecord {
    pub fn page(page_name: impl Into<PageName>, count: u32) -> Self {
        Self {
            page_name: page_name.into(),
            trigger_id: None,
            count,
        }
    }

    pub fn trigger(
        page_name: impl Into<PageName>,
        trigger_id: impl Into<TriggerId>,
        count: u32,
    ) -> Self {
        Self {
            page_name: page_name.into(),
            trigger_id: Some(trigger_id.into()),
            count,
        }
    }
}

/// Ordered count records, a sparse `(page, trigger)` matrix.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountTable(Vec<CountRecord>);

impl CountTable {
    pub fn new(records: Vec<CountRecord>) -> Self {
        Self(records)
    }

    pub fn records(&self) -> &[CountRecord] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First record for `page_name` that also matches `trigger_id` when one
    /// is given.
    pub fn find(&self, page_name: &PageName, trigger_id: Option<&TriggerId>) -> Option<&CountRecord> {
        self.0.iter().find(|record| {
            &record.page_name == page_name
                && trigger_id.map_or(true, |trigger| record.trigger_id.as_ref() == Some(trigger))
        })
    }

    /// Like [`CountTable::find`], a missing record counts as zero.
    pub fn count_for(&self, page_name: &PageName, trigger_id: Option<&TriggerId>) -> u32 {
        self.find(page_name, trigger_id).map_or(0, |record| record.count)
    }
}

impl From<Vec<CountRecord>> for CountTable {
    fn from(records: Vec<CountRecord>) -> Self {
        Self(records)
    }
}

impl FromIterator<CountRecord> for CountTable {
    fn from_iter<I: IntoIterator<Item = CountRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
