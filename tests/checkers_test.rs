use skipset::SkipList;

#[global_allocator]
static ALLOCATOR: checkers::Allocator = checkers::Allocator::system();

#[checkers::test]
fn test_allocations() {
    let mut sk = SkipList::with_seed(47);
    let _: Vec<u32> = sk.iter_all().cloned().collect();
    let _: Vec<u32> = sk.range(Some(&10), Some(&20)).cloned().collect();
    let _: Vec<u32> = sk.range(Some(&10), Some(&20)).cloned().collect();

    for i in 0..50u32 {
        sk.insert(i);
    }
    sk.contains(&13);
    let _ = sk.search(&13);
    let _ = sk.last_lt(&25);
    let _ = sk.last_le(&25);
    let _ = sk.first_gt(&25);
    let _ = sk.first_ge(&25);
    let _: Vec<u32> = sk.iter_all().cloned().collect();
    let _: Vec<u32> = sk.range(Some(&10), Some(&20)).cloned().collect();

    // Removal recycles arena slots; make sure nothing leaks on reuse.
    for i in (0..50u32).step_by(2) {
        sk.remove(&i);
    }
    for i in 100..125u32 {
        sk.insert(i);
    }
    let _: Vec<u32> = sk.iter_all().cloned().collect();
}
