/// Run this example with cargo run --example simple
use skipset::SkipList;

fn main() {
    let mut sk = SkipList::from(vec![0u32, 1, 2]);

    // print the skip list, one chain per level
    println!("{:?}", sk);

    // Test membership
    if sk.contains(&0) {
        println!("It contains 0!");
    }
    if !sk.contains(&99) {
        println!("It doesn't contain 99 :C");
    }
    // Insert and remove elements
    if sk.insert(99) {
        println!("... it now contains 99 🎉");
    }
    // Elements are unique
    if !sk.insert(99) {
        println!("... can't insert 99 twice :c");
    }

    if sk.remove(&99) == Some(99) {
        println!("... I removed 99");
    }

    // We can check how many elements are in the skip list
    dbg!(sk.len(), sk.is_empty());

    // Let's make a big skip list
    let sk: SkipList<u32> = (0..1000).collect();

    // Lets iterate over all of them
    let all_eles: Vec<_> = sk.iter_all().collect();
    dbg!((all_eles.len(), sk.len()));

    // Lets iterate over a range, bounds inclusive
    dbg!(sk.range(Some(&700), Some(&705)).collect::<Vec<_>>());

    // And ask boundary questions about keys that aren't in the list
    let sparse = SkipList::from(vec![1u32, 3, 5, 7, 9]);
    dbg!(sparse.last_lt(&5));
    dbg!(sparse.last_le(&4));
    dbg!(sparse.first_gt(&5));
    dbg!(sparse.first_ge(&4));
}
