use crate::SkipList;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize + Ord, R> Serialize for SkipList<T, R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let eles: Vec<_> = self.iter_all().collect();
        eles.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de> + Ord> Deserialize<'de> for SkipList<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let eles: Vec<T> = Deserialize::deserialize(deserializer)?;
        Ok(SkipList::from(eles))
    }
}
