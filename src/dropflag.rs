//! This module is for testing only

use std::cell::Cell;
use std::rc::Rc;

/// Shared count of `Tracked` values dropped so far.
#[derive(Clone)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter { drops: Rc::new(Cell::new(0)) }
    }

    pub fn count(&self) -> usize {
        self.drops.get()
    }
}

/// Value that bumps its counter when dropped. Compares by `value` only.
#[derive(Debug)]
pub struct Tracked {
    pub value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn new(value: i32, counter: &DropCounter) -> Tracked {
        Tracked { value, drops: counter.drops.clone() }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn counts_drops() {
    let counter = DropCounter::new();
    let a = Tracked::new(1, &counter);
    let b = Tracked::new(1, &counter);
    assert!(a == b);
    assert_eq!(0, counter.count());
    std::mem::drop(a);
    assert_eq!(1, counter.count());
    std::mem::drop(b);
    assert_eq!(2, counter.count());
}
