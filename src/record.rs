use crate::field::FieldStr;

/// A single student record.
///
/// Values are clamped at construction: `name` and `major` go through
/// [`FieldStr`] truncation. The key is not required to be unique and the
/// GPA is stored as given; neither is validated by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: i32,
    name: FieldStr,
    major: FieldStr,
    gpa: f32,
}

impl Record {
    pub fn new(key: i32, name: &str, major: &str, gpa: f32) -> Self {
        Self {
            key,
            name: FieldStr::new(name),
            major: FieldStr::new(major),
            gpa,
        }
    }

    /// The roll number this record is looked up by.
    pub fn key(&self) -> i32 {
        self.key
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn major(&self) -> &str {
        self.major.as_str()
    }

    pub fn gpa(&self) -> f32 {
        self.gpa
    }

    /// The record that results from overwriting this one with `fields`.
    /// The key is kept; an update never changes a record's key.
    pub(crate) fn updated(&self, fields: &Fields) -> Record {
        Record {
            key: self.key,
            name: fields.name.clone(),
            major: fields.major.clone(),
            gpa: fields.gpa,
        }
    }
}

/// The writable portion of a record, used as the update payload.
#[derive(Debug, Clone)]
pub struct Fields {
    pub(crate) name: FieldStr,
    pub(crate) major: FieldStr,
    pub(crate) gpa: f32,
}

impl Fields {
    pub fn new(name: &str, major: &str, gpa: f32) -> Self {
        Self {
            name: FieldStr::new(name),
            major: FieldStr::new(major),
            gpa,
        }
    }
}
