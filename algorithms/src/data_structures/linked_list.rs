//! Singly-linked list with owned nodes, and in-place reversal.
//!
//! Variables:
//!   head : Option<Box<ListNode<T>>>  — pointer to first node, None if empty
//!   N    : usize                     — number of nodes
//!
//! Equations:
//!   push_front(x): new_node.next = head,  head = new_node,  N' = N+1  O(1)
//!   pop_front():   head = head.next,  N' = N-1                         O(1)
//!   push_back(x):  walk to tail, tail.next = new_node                  O(N)
//!
//!   reverse(head):
//!     prev = None, curr = head
//!     while curr:  next = curr.next.take(),  curr.next = prev,
//!                  prev = curr,  curr = next
//!     return prev                                                       O(N), O(1) space
//!
//! Every link is a `Box` moved out with `take()` before it is reused, so the
//! old head's forward link is gone by the time it becomes the new tail and
//! no cycle can form.
//!
//! Drop, clone, equality and debug output all walk the chain in a loop; none
//! of them costs a stack frame per node.

use std::fmt;

use serde::{Deserialize, Serialize};

pub type Link<T> = Option<Box<ListNode<T>>>;

pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(val: T) -> Self {
        Self { val, next: None }
    }

    /// Builds a chain in iteration order and returns its head.
    pub fn from_values<I>(values: I) -> Link<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        values
            .into_iter()
            .rev()
            .fold(None, |next, val| Some(Box::new(ListNode { val, next })))
    }

    /// Values from this node to the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }
}

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        let rest: Vec<T> = iter(&self.next).cloned().collect();
        Self {
            val: self.val.clone(),
            next: ListNode::from_values(rest),
        }
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub fn iter<T>(head: &Link<T>) -> Iter<'_, T> {
    Iter {
        next: head.as_deref(),
    }
}

pub fn to_vec<T: Clone>(head: &Link<T>) -> Vec<T> {
    iter(head).cloned().collect()
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

/// Reverses every link and returns the former tail.
pub fn reverse_list<T>(head: Link<T>) -> Link<T> {
    let mut prev = None;
    let mut curr = head;
    while let Some(mut node) = curr {
        curr = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Same result as [`reverse_list`], one stack frame per node.
pub fn reverse_list_recursive<T>(head: Link<T>) -> Link<T> {
    fn relink<T>(curr: Link<T>, prev: Link<T>) -> Link<T> {
        match curr {
            None => prev,
            Some(mut node) => {
                let next = node.next.take();
                node.next = prev;
                relink(next, Some(node))
            }
        }
    }
    relink(head, None)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReversalStrategy {
    #[default]
    Iterative,
    Recursive,
}

impl ReversalStrategy {
    pub const ALL: [ReversalStrategy; 2] = [Self::Iterative, Self::Recursive];

    pub fn reverse<T>(self, head: Link<T>) -> Link<T> {
        match self {
            Self::Iterative => reverse_list(head),
            Self::Recursive => reverse_list_recursive(head),
        }
    }
}

// `ListNode` implements `Drop`, so its `val` cannot be moved out; the owned
// list keeps its own node type to support `pop_front`.
struct Node<T> {
    val: T,
    next: Option<Box<Node<T>>>,
}

pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push_front(&mut self, val: T) {
        let node = Box::new(Node {
            val,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn push_back(&mut self, val: T) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(Box::new(Node { val, next: None }));
        self.len += 1;
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.val)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |n| n.next.as_deref()).map(|n| &n.val)
    }

    /// Hands the values over as a bare [`ListNode`] chain.
    pub fn into_head(mut self) -> Link<T> {
        let mut values = Vec::with_capacity(self.len);
        while let Some(val) = self.pop_front() {
            values.push(val);
        }
        ListNode::from_values(values)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        let len = values.len();
        let head = values
            .into_iter()
            .rev()
            .fold(None, |next, val| Some(Box::new(Node { val, next })));
        Self { head, len }
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
