//! Aggregator Domain Service
//!
//! Turns raw purpose records into the [`AggregatedModel`] the report is
//! rendered from.
//!
//! ## Stages
//!
//! 1. `number_top_level` - keep records with data, number them from 1
//! 2. `number_children` - keep composed purposes with data, continue numbering
//!    parent by parent
//! 3. `collect_data_categories` / `collect_transfers` - dedup over top-level
//!    purposes only
//! 4. `flatten_children` - every kept composed purpose in one list
//!
//! The [`IdSequence`] is passed from stage 1 into stage 2 and returned again,
//! so top-level purposes always hold the lowest identifiers.

use tracing::debug;

use crate::domain::entities::{AggregatedModel, Purpose};
use crate::domain::value_objects::{DataCategory, IdSequence};
use crate::error::ReportResult;
use crate::models::{RawPurposeRecord, Transfer};

use super::dedup::dedup_by_key;

/// A numbered top-level purpose whose children are not numbered yet
#[derive(Debug)]
struct Pending {
    purpose: Purpose,
    record: String,
    children: Vec<RawPurposeRecord>,
}

/// Build the report model from the loader's records.
///
/// Output order depends only on input order. A kept record without a `name`
/// aborts the whole aggregation; dropped records are never inspected.
pub fn aggregate(records: Vec<RawPurposeRecord>) -> ReportResult<AggregatedModel> {
    let total = records.len();

    let (pending, ids) = number_top_level(records, IdSequence::start())?;
    debug!(kept = pending.len(), dropped = total - pending.len(), "numbered top-level purposes");

    let (top_purposes, ids) = number_children(pending, ids)?;
    debug!(issued = ids.issued(), "numbered composed purposes");

    let data_categories = collect_data_categories(&top_purposes);
    let transfers = collect_transfers(&top_purposes);
    let child_purposes = flatten_children(&top_purposes);
    debug!(
        data_categories = data_categories.len(),
        transfers = transfers.len(),
        "collected lanes"
    );

    Ok(AggregatedModel {
        top_purposes,
        child_purposes,
        data_categories,
        transfers,
    })
}

fn number_top_level(
    records: Vec<RawPurposeRecord>,
    ids: IdSequence,
) -> ReportResult<(Vec<Pending>, IdSequence)> {
    let mut pending = Vec::new();
    let mut ids = ids;

    for (index, mut raw) in records.into_iter().enumerate() {
        if !raw.has_data() {
            continue;
        }

        let record = describe_record(&raw, index);
        let children = std::mem::take(&mut raw.purposes);
        let (id, next) = ids.issue();
        ids = next;

        pending.push(Pending {
            purpose: Purpose::from_raw(raw, id, &record)?,
            record,
            children,
        });
    }

    Ok((pending, ids))
}

fn number_children(
    pending: Vec<Pending>,
    ids: IdSequence,
) -> ReportResult<(Vec<Purpose>, IdSequence)> {
    let mut top = Vec::with_capacity(pending.len());
    let mut ids = ids;

    for Pending {
        mut purpose,
        record,
        children,
    } in pending
    {
        for (position, child) in children.into_iter().enumerate() {
            if !child.has_data() {
                continue;
            }

            let (id, next) = ids.issue();
            ids = next;
            let label = format!("{} (composed purpose #{})", record, position + 1);
            purpose.purposes.push(Purpose::from_raw(child, id, &label)?);
        }
        top.push(purpose);
    }

    Ok((top, ids))
}

/// Categories of all top-level purposes, unique and ascending.
///
/// Composed purposes' own categories are not included.
fn collect_data_categories(top: &[Purpose]) -> Vec<DataCategory> {
    let mut categories = dedup_by_key(top.iter().flat_map(|p| p.data.iter().cloned()), |c| {
        c.clone()
    });
    categories.sort();
    categories
}

/// Transfers of all top-level purposes, first occurrence per
/// (recipient, policy), stably sorted by recipient.
///
/// Composed purposes' own transfers are not included.
fn collect_transfers(top: &[Purpose]) -> Vec<Transfer> {
    let mut transfers = dedup_by_key(
        top.iter().flat_map(|p| p.transfers.iter().cloned()),
        |t| {
            let (recipient, policy) = t.key();
            (recipient.to_owned(), policy.to_owned())
        },
    );
    transfers.sort_by(|a, b| a.recipient_id.cmp(&b.recipient_id));
    transfers
}

fn flatten_children(top: &[Purpose]) -> Vec<Purpose> {
    top.iter()
        .flat_map(|p| p.purposes.iter().cloned())
        .collect()
}

fn describe_record(raw: &RawPurposeRecord, index: usize) -> String {
    match &raw.source {
        Some(path) => path.display().to_string(),
        None => format!("record #{}", index + 1),
    }
}
