use std::fmt;

use crate::store::{IdOf, Record, Repository, StoreError};

/// Where a staged buffer came from
#[derive(Debug, Clone, Copy)]
enum Origin<Id> {
    /// A draft for a record that does not exist yet
    New,
    /// A copy of an existing record, staged at `base_revision`
    Existing { id: Id, base_revision: u64 },
}

/// A transient staging buffer for one record under edit.
///
/// Staging copies the record; field edits touch only the buffer. `save`
/// writes the whole buffer back through the repository (create for drafts,
/// revision-checked update otherwise). Dropping or cancelling the session
/// discards the buffer and leaves the store untouched.
#[derive(Clone)]
pub struct EditSession<R: Repository> {
    origin: Origin<IdOf<R>>,
    buffer: R::Record,
}

impl<R: Repository> fmt::Debug for EditSession<R>
where
    IdOf<R>: fmt::Debug,
    R::Record: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSession")
            .field("origin", &self.origin)
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl<R: Repository> EditSession<R> {
    /// Stage an existing record for editing
    pub fn stage(repo: &R, id: IdOf<R>) -> Result<Self, StoreError> {
        let record = repo.get(id)?;
        Ok(EditSession {
            origin: Origin::Existing {
                id,
                base_revision: record.revision(),
            },
            buffer: record.clone(),
        })
    }

    /// Stage a draft for a record to be created on save
    pub fn draft(buffer: R::Record) -> Self {
        EditSession {
            origin: Origin::New,
            buffer,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self.origin, Origin::New)
    }

    /// The staged record's id, if it exists in the store
    pub fn id(&self) -> Option<IdOf<R>> {
        match self.origin {
            Origin::New => None,
            Origin::Existing { id, .. } => Some(id),
        }
    }

    pub fn buffer(&self) -> &R::Record {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut R::Record {
        &mut self.buffer
    }

    /// Write the buffer back. On error the session stays staged so the
    /// caller can fix the buffer or cancel.
    pub fn save(&self, repo: &mut R) -> Result<IdOf<R>, StoreError> {
        match self.origin {
            Origin::New => repo.create(self.buffer.clone()),
            Origin::Existing { id, base_revision } => {
                repo.update(self.buffer.clone(), base_revision)?;
                Ok(id)
            }
        }
    }

    /// Discard the buffer unconditionally
    pub fn cancel(self) {}
}
