extern crate hashed_splays;
extern crate rand;

use self::rand::{thread_rng, Rng};
use hashed_splays::splay_tree::SplayTree;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 100_000;
const KEY_RANGE: u32 = 2048;

fn assert_ascending(tree: &SplayTree<u32>) {
    let elements = tree.iter().collect::<Vec<&u32>>();
    for window in elements.windows(2) {
        assert!(window[0] < window[1]);
    }
}

#[test]
fn int_test_splay_tree() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = SplayTree::new();
    let mut expected = BTreeSet::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        tree.insert_or_update(key, |_, _| {});
        expected.insert(key);

        assert_eq!(tree.root(), Some(&key));
    }

    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.iter().collect::<Vec<&u32>>(),
        expected.iter().collect::<Vec<&u32>>(),
    );
    assert_ascending(&tree);

    // removing a value outside the key range touches nothing
    let splays = tree.splay_count();
    assert_eq!(tree.remove(&(KEY_RANGE + 1)), None);
    assert_eq!(tree.splay_count(), splays);
    assert_eq!(tree.len(), expected.len());

    let mut values = expected.iter().cloned().collect::<Vec<u32>>();
    thread_rng().shuffle(&mut values);

    for (i, value) in values.iter().enumerate() {
        assert_eq!(tree.remove(value), Some(*value));
        assert_eq!(tree.remove(value), None);
        assert!(!tree.contains(value));

        if i % 512 == 0 {
            assert_ascending(&tree);
        }
    }

    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}

#[derive(Clone, Debug)]
struct Item {
    key: u32,
    count: u64,
}

impl Item {
    fn new(key: u32) -> Self {
        Item { key, count: 1 }
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Item) -> bool {
        self.key == other.key
    }
}

impl Eq for Item {}

impl Ord for Item {
    fn cmp(&self, other: &Item) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Item) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn int_test_splay_tree_merge() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = SplayTree::new();
    let mut expected: BTreeMap<u32, u64> = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, KEY_RANGE);

        tree.insert_or_update(Item::new(key), |existing, _| existing.count += 1);
        *expected.entry(key).or_insert(0) += 1;

        assert_eq!(tree.root().map(|item| item.key), Some(key));
    }

    assert_eq!(tree.len(), expected.len());
    assert_eq!(
        tree.iter().map(|item| (item.key, item.count)).collect::<Vec<_>>(),
        expected.iter().map(|(key, count)| (*key, *count)).collect::<Vec<_>>(),
    );

    let mut keys = expected.keys().cloned().collect::<Vec<u32>>();
    thread_rng().shuffle(&mut keys);

    for key in keys {
        let removed = tree.remove(&Item::new(key));
        assert_eq!(removed.as_ref().map(|item| item.count), expected.remove(&key));
    }

    assert!(tree.is_empty());
}

#[test]
fn int_test_splay_count_is_monotonic() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = SplayTree::new();
    let mut last = 0;

    for _ in 0..1000 {
        match rng.gen_range(0, 3) {
            0 => {
                tree.insert_or_update(rng.gen_range(0, 64u32), |_, _| {});
            }
            1 => {
                tree.remove(&rng.gen_range(0, 64));
            }
            _ => {
                tree.splay(&rng.gen_range(0, 64));
            }
        }

        let splays = tree.splay_count();
        assert!(splays >= last);
        last = splays;
    }
}
