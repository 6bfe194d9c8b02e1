use crate::{slot, Error, Record};
use log::debug;
use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

/// Iterator over every record in a store, in append order.
///
/// A scan owns its own file handle, so it holds nothing across store
/// operations and a fresh call to [`RecordStore::scan`] restarts from the
/// first slot. The handle is released when the scan is dropped or
/// exhausted.
///
/// [`RecordStore::scan`]: crate::RecordStore::scan
pub struct Scan {
    reader: Option<BufReader<File>>,
}

impl Scan {
    pub(crate) fn open(path: &Path) -> Result<Self, Error> {
        match File::open(path) {
            Ok(file) => Ok(Scan {
                reader: Some(BufReader::new(file)),
            }),
            // A store that has never been written to is empty, not broken.
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => Ok(Scan { reader: None }),
            Err(err) => Err(Error::FileOpen(path.to_path_buf(), err)),
        }
    }

    fn next_impl(&mut self) -> Option<Result<Record, Error>> {
        let reader = self.reader.as_mut()?;

        let mut buf = [0u8; slot::SIZE];
        let filled = match slot::fill(reader, &mut buf) {
            Ok(filled) => filled,
            Err(err) => {
                self.reader = None;
                return Some(Err(Error::Read(err)));
            }
        };

        if filled < slot::SIZE {
            if filled > 0 {
                debug!("ignoring {} trailing bytes of a partial slot", filled);
            }
            self.reader = None;
            return None;
        }

        Some(Ok(slot::decode(&buf)))
    }
}

impl Iterator for Scan {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_impl()
    }
}
