use std::{cell::RefCell, rc::Rc};

use varbind::*;

fn record<E: Clone + 'static>(v: &Variable<E>) -> Rc<RefCell<Vec<E>>> {
    let values = Rc::new(RefCell::new(Vec::new()));
    let values0 = values.clone();
    v.subscribe(move |x| values0.borrow_mut().push(x.clone()));
    values
}

#[test]
fn new_then_get() {
    let v = Variable::new(42);
    assert_eq!(v.get_value(), Ok(42));
}

#[test]
fn subscriber_receives_every_value_once() {
    let v = Variable::new(0);
    let r = record(&v);
    for x in [3, 1, 4, 1, 5] {
        v.set_value(x);
    }
    assert_eq!(*r.borrow(), vec![3, 1, 4, 1, 5]);
}

#[test]
fn late_subscriber_only_sees_later_values() {
    let v = Variable::new(0);
    v.set_value(1);
    let r = record(&v);
    v.set_value(2);
    assert_eq!(*r.borrow(), vec![2]);
}

#[test]
fn identical_subscribers_run_independently() {
    let v = Variable::new(0);
    let r = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..2 {
        let r = r.clone();
        v.subscribe(move |x| r.borrow_mut().push(*x));
    }
    v.set_value(9);
    assert_eq!(*r.borrow(), vec![9, 9]);
}

#[test]
fn map_doubles() {
    let v = Variable::new(1);
    let doubled = v.map(|x| x * 2);
    assert!(doubled.get_value().is_err());

    v.set_value(5);
    assert_eq!(doubled.get_value(), Ok(10));
    v.set_value(7);
    assert_eq!(doubled.get_value(), Ok(14));
}

#[test]
fn clone_shares_value() {
    let v = Variable::new(1);
    let v2 = v.clone();
    let r = record(&v2);
    v.set_value(2);
    assert_eq!(v2.get_value(), Ok(2));
    assert_eq!(*r.borrow(), vec![2]);
}

#[test]
fn no_value_error_is_std_error() {
    let v = Variable::new(1);
    let m = v.map(|x| x + 1);
    let e: Box<dyn std::error::Error> = Box::new(m.get_value().unwrap_err());
    assert_eq!(e.to_string(), "no value");
}

#[test]
fn label_scenario() {
    let label = Label::new();
    label.bind("hello".to_string());
    assert_eq!(label.text(), "hello");
}

#[test]
fn label_follows_mapped_variable() {
    let label = Rc::new(Label::new());
    let count = Variable::new(0);
    count.map(|x| format!("{x} items")).bind_to(label.clone());

    count.set_value(1);
    assert_eq!(label.text(), "1 items");
    count.set_value(2);
    assert_eq!(label.text(), "2 items");
}
