/// Locally generated record id. Ids are `len + 1` at insertion time, so they
/// are only unique as long as nothing is ever removed.
pub type RecordId = u32;

/// A row that lives in a [`Repository`](crate::data::Repository).
///
/// `Draft` is everything the caller supplies; the repository supplies the id.
pub trait Record: Clone {
    type Draft;

    fn id(&self) -> RecordId;
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;
}
