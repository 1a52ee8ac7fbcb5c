pub mod linked_list;

pub use linked_list::{reverse_list, reverse_list_recursive, LinkedList, ListNode};
