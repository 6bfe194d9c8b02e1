use crate::{
    record::{Fields, Record},
    scan::Scan,
    slot, Error,
};
use log::debug;
use std::{
    fs::OpenOptions,
    io::{self, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

/// A store of fixed-width records in one flat binary file.
///
/// The store holds only the path. Every operation opens its own handle,
/// performs one complete read or write pass and closes it again, so no
/// state is cached between calls. Records are addressed purely by
/// sequential scan: keys are not required to be unique, and lookups
/// return the first match in append order.
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store over the given file path. The file itself is not
    /// touched until the first operation; a path that does not exist yet
    /// reads as an empty store.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        RecordStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record at end-of-file, creating the file if absent.
    ///
    /// The slot is encoded up front and written with a single call. On
    /// error the caller must assume the record was not stored.
    pub fn append(&self, record: &Record) -> Result<(), Error> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|err| Error::FileOpen(self.path.clone(), err))?;

        file.write_all(&slot::encode(record)).map_err(Error::Write)?;

        debug!("appended record {} to {}", record.key(), self.path.display());
        Ok(())
    }

    /// Iterate all records in append order. An absent file yields an
    /// empty iterator.
    pub fn scan(&self) -> Result<Scan, Error> {
        Scan::open(&self.path)
    }

    /// Find the first record with the given key. `Ok(None)` when no
    /// record matches or the file does not exist.
    pub fn find(&self, key: i32) -> Result<Option<Record>, Error> {
        for record in self.scan()? {
            let record = record?;
            if record.key() == key {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }

    /// Overwrite the first record with the given key in place.
    ///
    /// The matched record keeps its key and its slot; only the remaining
    /// fields are replaced. Returns the record as now stored, or
    /// `Ok(None)` with the file untouched when no record matches.
    pub fn update(&self, key: i32, fields: &Fields) -> Result<Option<Record>, Error> {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(Error::FileOpen(self.path.clone(), err)),
        };

        let mut buf = [0u8; slot::SIZE];
        let mut index = 0u64;
        loop {
            let filled = slot::fill(&mut file, &mut buf).map_err(Error::Read)?;
            if filled < slot::SIZE {
                // End of file, or a trailing partial slot that scans also
                // ignore. Nothing left to match either way.
                return Ok(None);
            }

            let current = slot::decode(&buf);
            if current.key() == key {
                let updated = current.updated(fields);
                file.seek(SeekFrom::Start(slot::offset_of(index)))
                    .map_err(Error::Seek)?;
                file.write_all(&slot::encode(&updated)).map_err(Error::Write)?;

                debug!("rewrote record {} in slot {}", key, index);
                return Ok(Some(updated));
            }

            index += 1;
        }
    }
}
