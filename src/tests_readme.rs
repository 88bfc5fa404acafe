// #![include_doc("../README.md", start)]
//! # varbind
//!
//! `varbind` is an observable variable with a one-way binding capability for UI code.
//!
//! ## Features
//!
//! - `Variable<E>`: Similar to `Rc<RefCell<E>>`, but every new value is pushed to the subscribed observers.
//! - `Variable::map`: Derives a `Variable` whose values are a transform of another `Variable`'s values.
//! - `Bindable`: A trait that consumers such as labels implement to receive pushed values.
//!
//! Observers are called synchronously, in subscription order, on the caller's stack. There is no scheduler and no unsubscribe.
//!
//! ```rust
//! use std::rc::Rc;
//! use varbind::{Label, Variable};
//!
//! let count = Variable::new(1);
//! let doubled = count.map(|x| x * 2);
//! assert!(doubled.get_value().is_err()); // the current value is not propagated
//!
//! let label = Rc::new(Label::new());
//! doubled.map(|x| format!("count x 2 = {x}")).bind_to(label.clone());
//!
//! count.set_value(5);
//! assert_eq!(doubled.get_value(), Ok(10));
//! assert_eq!(label.text(), "count x 2 = 10");
//! ```
//!
//! ## License
//!
//! This project is dual licensed under Apache-2.0/MIT.
//!
//! ## Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
// #![include_doc("../README.md", end)]
