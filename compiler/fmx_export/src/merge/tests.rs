use super::*;
use pretty_assertions::assert_eq;

fn keys<T>(merge: KeyedMerge<T>) -> Vec<String> {
    merge.into_entries().into_iter().map(|(k, _)| k).collect()
}

#[test]
fn insert_keeps_first_position_and_last_value() {
    let mut merge = KeyedMerge::new();
    merge.insert("fn", 1);
    merge.insert("other", 2);
    merge.insert("fn", 3);

    assert_eq!(
        merge.into_entries(),
        vec![("fn".to_string(), 3), ("other".to_string(), 2)]
    );
}

#[test]
fn vacate_then_reinsert_keeps_first_position() {
    let mut merge = KeyedMerge::new();
    merge.insert("a", ());
    merge.insert("b", ());
    merge.insert("c", ());
    merge.vacate("a");
    merge.insert("a", ());
    merge.insert("c", ());

    assert_eq!(keys(merge), vec!["a", "b", "c"]);
}

#[test]
fn vacated_key_is_left_out() {
    let mut merge = KeyedMerge::new();
    merge.insert("a", 1);
    merge.insert("b", 2);
    merge.insert("c", 3);
    merge.vacate("b");
    merge.insert("c", 30);

    assert_eq!(
        merge.into_entries(),
        vec![("a".to_string(), 1), ("c".to_string(), 30)]
    );
}

#[test]
fn vacating_new_key_reserves_its_position() {
    let mut merge = KeyedMerge::new();
    merge.vacate("k");
    merge.insert("j", 1);
    merge.insert("k", 2);

    assert_eq!(keys(merge), vec!["k", "j"]);
}

#[test]
fn vacate_only_is_empty() {
    let mut merge: KeyedMerge<u8> = KeyedMerge::new();
    merge.vacate("zz");
    assert!(merge.into_entries().is_empty());
}
