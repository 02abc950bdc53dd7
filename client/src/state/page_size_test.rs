use super::*;

#[test]
fn default_options_are_documented_set() {
    assert_eq!(PageSizeOptions::default().as_slice(), &[20, 50, 100, 1000]);
}

#[test]
fn empty_options_fall_back_to_default() {
    assert_eq!(PageSizeOptions::new(Vec::new()), PageSizeOptions::default());
}

#[test]
fn prev_disabled_only_at_first_option() {
    let options = PageSizeOptions::default();
    assert!(options.prev_disabled(20));
    assert!(!options.prev_disabled(50));
    assert!(!options.prev_disabled(100));
    assert!(!options.prev_disabled(1000));
}

#[test]
fn next_disabled_only_at_last_option() {
    let options = PageSizeOptions::default();
    assert!(!options.next_disabled(20));
    assert!(!options.next_disabled(50));
    assert!(!options.next_disabled(100));
    assert!(options.next_disabled(1000));
}

#[test]
fn stepping_walks_adjacent_options() {
    let options = PageSizeOptions::default();
    assert_eq!(options.next(20), Some(50));
    assert_eq!(options.next(100), Some(1000));
    assert_eq!(options.prev(1000), Some(100));
    assert_eq!(options.prev(50), Some(20));
    assert_eq!(options.prev(20), None);
    assert_eq!(options.next(1000), None);
}

#[test]
fn unknown_size_disables_prev_and_steps_next_to_first() {
    let options = PageSizeOptions::default();
    assert!(options.prev_disabled(30));
    assert_eq!(options.next(30), Some(20));
}

#[test]
fn single_option_disables_both_directions() {
    let options = PageSizeOptions::new(vec![25]);
    assert!(options.prev_disabled(25));
    assert!(options.next_disabled(25));
    assert_eq!(options.first(), 25);
}
