use skipset::SkipList;

fn main() {
    // Make a new skip list
    let mut sk = SkipList::new();
    for i in 0..5u32 {
        // Inserts are O(log(n)) on average
        sk.insert(i);
    }
    // You can print the skip list level by level!
    dbg!(&sk);
    // Membership checks are O(log(n)) too
    assert!(sk.contains(&0));
    assert!(!sk.contains(&10));
    // Boundary searches find neighbours of keys that need not be present
    assert_eq!(sk.first_gt(&2), Some(&3));
    assert_eq!(sk.last_lt(&2), Some(&1));
}
