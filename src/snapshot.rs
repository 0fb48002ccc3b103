//! Serde support, a queue is written as its order plus `[data, priority]` pairs front to back.

use crate::order::{Order, Priority};
use crate::queue::PQueue;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

struct Entries<'a, T>(&'a PQueue<T>);

impl<'a, T> Serialize for Entries<'a, T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|item| (item.data(), item.priority())))
    }
}

impl<T> Serialize for PQueue<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("PQueue", 2)?;
        s.serialize_field("order", &self.order())?;
        s.serialize_field("items", &Entries(self))?;
        s.end()
    }
}

#[derive(Deserialize)]
struct Snapshot<T> {
    order: Order,
    items: Vec<(T, Priority)>,
}

//items are listed front to back, reinserting them in that order rebuilds the same chain
impl<'de, T> Deserialize<'de> for PQueue<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = Snapshot::<T>::deserialize(deserializer)?;
        let mut q = PQueue::with_order(snapshot.order);
        q.extend(snapshot.items);
        Ok(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_json() {
        let mut q = PQueue::new();
        q.insert("A", 1);
        q.insert("B", 5);
        q.insert("C", 3);
        let s = serde_json::to_string(&q).unwrap();
        assert_eq!(
            s,
            r#"{"order":"Descending","items":[["B",5],["C",3],["A",1]]}"#
        );
    }

    #[test]
    fn from_json() {
        let q: PQueue<String> =
            serde_json::from_str(r#"{"order":"Ascending","items":[["x",2],["y",2],["z",-4]]}"#)
                .unwrap();
        assert_eq!(q.order(), Order::Ascending);
        assert_eq!(q.len(), 3);
        assert_eq!(q.to_string(), "z (-4): x (2): y (2)");
    }

    #[test]
    fn ties_survive() {
        let mut q = PQueue::with_order(Order::Descending);
        q.insert(1usize, 0);
        q.insert(2usize, 0);
        q.insert(3usize, 7);
        let s = serde_json::to_string(&q).unwrap();
        let r: PQueue<usize> = serde_json::from_str(&s).unwrap();
        let v: Vec<_> = r.into_iter().collect();
        assert_eq!(v, vec![(3, 7), (1, 0), (2, 0)]);
    }
}
