use crate::record::Record;
use quickcheck::{Arbitrary, Gen};

#[derive(Debug, Clone)]
pub struct TestRecord {
    pub key: i32,
    pub name: String,
    pub major: String,
    pub gpa: f32,
}

impl TestRecord {
    /// The record these raw values clamp down to once stored.
    pub fn record(&self) -> Record {
        Record::new(self.key, &self.name, &self.major, self.gpa)
    }
}

impl Arbitrary for TestRecord {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Self {
            key: Arbitrary::arbitrary(g),
            name: Arbitrary::arbitrary(g),
            major: Arbitrary::arbitrary(g),
            gpa: Arbitrary::arbitrary(g),
        }
    }
}
