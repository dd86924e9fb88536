#![allow(dead_code)]

use seqsort::core::{Bidirectional, Sequence};
use std::cell::{Cell, RefCell};
use std::cmp::Ordering;

/// Handle of a node in a [`NodeList`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeId(usize);

struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

/// Circular doubly-linked list stored in an arena.
///
/// Node 0 is the sentinel and doubles as the end position. Nodes are linked
/// in list order, not in storage order, so offsets into the arena say nothing
/// about positions in the list.
pub struct NodeList<T> {
    nodes: Vec<Node<T>>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                value: None,
                prev: 0,
                next: 0,
            }],
        }
    }

    pub fn push_back(&mut self, value: T) {
        let last = self.nodes[0].prev;
        self.link(value, last, 0);
    }

    pub fn push_front(&mut self, value: T) {
        let first = self.nodes[0].next;
        self.link(value, 0, first);
    }

    fn link(&mut self, value: T, prev: usize, next: usize) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            value: Some(value),
            prev,
            next,
        });
        self.nodes[prev].next = id;
        self.nodes[next].prev = id;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut cur = self.nodes[0].next;
        std::iter::from_fn(move || {
            if cur == 0 {
                return None;
            }
            let node = &self.nodes[cur];
            cur = node.next;
            node.value.as_ref()
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }
}

impl<T: Clone> NodeList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> FromIterator<T> for NodeList<T> {
    /// Alternates between front and back insertion so that list order and
    /// arena order differ.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mid = items.len() / 2;
        let mut list = NodeList::new();
        let mut items = items.into_iter();
        let front: Vec<T> = items.by_ref().take(mid).collect();
        for value in front.into_iter().rev() {
            list.push_front(value);
        }
        for value in items {
            list.push_back(value);
        }
        list
    }
}

impl<T> Sequence for NodeList<T> {
    type Item = T;
    type Pos = NodeId;

    fn start(&self) -> NodeId {
        NodeId(self.nodes[0].next)
    }

    fn end(&self) -> NodeId {
        NodeId(0)
    }

    fn successor(&self, pos: NodeId) -> NodeId {
        NodeId(self.nodes[pos.0].next)
    }

    fn at(&self, pos: NodeId) -> &T {
        self.nodes[pos.0]
            .value
            .as_ref()
            .expect("end position has no element")
    }

    fn swap_at(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let tmp = self.nodes[a.0].value.take();
        self.nodes[a.0].value = self.nodes[b.0].value.take();
        self.nodes[b.0].value = tmp;
    }
}

impl<T> Bidirectional for NodeList<T> {
    fn predecessor(&self, pos: NodeId) -> NodeId {
        NodeId(self.nodes[pos.0].prev)
    }
}

thread_local! {
    static COMPARISONS: Cell<u64> = const { Cell::new(0) };
}

/// Integer key that counts how often it is compared on the current thread.
#[derive(Clone, Copy, Debug)]
pub struct Counted(pub u32);

impl Counted {
    pub fn reset() {
        COMPARISONS.with(|c| c.set(0));
    }

    pub fn comparisons() -> u64 {
        COMPARISONS.with(|c| c.get())
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        COMPARISONS.with(|c| c.set(c.get() + 1));
        self.0 == other.0
    }
}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        COMPARISONS.with(|c| c.set(c.get() + 1));
        self.0.partial_cmp(&other.0)
    }
}

/// Element ordered by `key` only; `tag` records where it started.
#[derive(Clone, Copy, Debug)]
pub struct Tagged {
    pub key: i32,
    pub tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Reference result for integer inputs.
pub fn std_sorted<T: Ord + Clone>(data: &[T]) -> Vec<T> {
    let mut expected = data.to_vec();
    expected.sort();
    expected
}

/// Sorted bit patterns of `data`, so inputs holding NaN can be compared as
/// multisets.
pub fn float_bag(data: &[f64]) -> Vec<u64> {
    let mut bits: Vec<u64> = data.iter().map(|x| x.to_bits()).collect();
    bits.sort_unstable();
    bits
}

/// Runs `f` on a thread with a 64 KiB stack.
///
/// Sorts that recurse into the larger partition overflow this on the
/// adversarial inputs from [`Gas::killer`].
pub fn on_small_stack<R, F>(f: F) -> R
where
    R: Send + 'static,
    F: FnOnce() -> R + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(64 * 1024)
        .spawn(f)
        .expect("spawn sorting thread")
        .join()
        .expect("sorting thread panicked")
}

#[derive(Default)]
struct Adversary {
    values: Vec<u32>,
    gas: u32,
    solid: u32,
    candidate: usize,
}

thread_local! {
    static ADVERSARY: RefCell<Adversary> = RefCell::new(Adversary::default());
}

/// Element whose value is decided while it is being sorted (McIlroy's
/// "A Killer Adversary for Quicksort").
///
/// All elements start out as "gas", greater than every settled value. When
/// two gas elements meet, the one that is not the likely pivot is frozen to
/// the next smallest value, so the pivot keeps ending up at an extreme.
#[derive(Debug)]
pub struct Gas(usize);

impl Gas {
    /// Sorts `n` gas elements with `sort` and returns the input that makes
    /// `sort` repeat exactly the same comparisons on plain integers.
    pub fn killer(n: usize, sort: impl FnOnce(&mut Vec<Gas>)) -> Vec<u32> {
        let gas = u32::try_from(n).expect("adversary size fits in u32");
        ADVERSARY.with(|a| {
            *a.borrow_mut() = Adversary {
                values: vec![gas; n],
                gas,
                solid: 0,
                candidate: 0,
            }
        });

        let mut items: Vec<Gas> = (0..n).map(Gas).collect();
        sort(&mut items);

        ADVERSARY.with(|a| std::mem::take(&mut a.borrow_mut().values))
    }

    fn compare(&self, other: &Self) -> Ordering {
        ADVERSARY.with(|a| {
            let a = &mut *a.borrow_mut();
            let (x, y) = (self.0, other.0);
            if a.values[x] == a.gas && a.values[y] == a.gas {
                let frozen = if x == a.candidate { x } else { y };
                a.values[frozen] = a.solid;
                a.solid += 1;
            }
            if a.values[x] == a.gas {
                a.candidate = x;
            } else if a.values[y] == a.gas {
                a.candidate = y;
            }
            a.values[x].cmp(&a.values[y])
        })
    }
}

impl PartialEq for Gas {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Gas {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
