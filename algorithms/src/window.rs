//! Closed index window over a linear sequence.
//!
//! Variables:
//!   front : usize  — leftmost cursor, inclusive
//!   back  : usize  — rightmost cursor, inclusive
//!   n     : usize  — length of the underlying sequence
//!
//! Equations:
//!   closed(n):        [0, n-1]  if n > 0, else none
//!   mid():            front + (back - front) / 2       (floor, overflow-free)
//!   discard_left(m):  front' = m + 1
//!   discard_right(m): back'  = m - 1                   (none when m == 0)
//!   step_inward():    front' = front + 1,  back' = back - 1
//!
//! Search loops run while `is_open()` (front <= back); mirror scans run while
//! `has_pair()` (front < back).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    front: usize,
    back: usize,
}

impl Window {
    /// Window spanning every index of a sequence of length `len`.
    pub fn closed(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|back| Self { front: 0, back })
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn back(&self) -> usize {
        self.back
    }

    pub fn is_open(&self) -> bool {
        self.front <= self.back
    }

    pub fn has_pair(&self) -> bool {
        self.front < self.back
    }

    /// Floor midpoint. The offset is halved before it is added to `front`,
    /// so `(front + back)` never has to fit in a `usize`.
    pub fn mid(&self) -> usize {
        self.front + (self.back - self.front) / 2
    }

    /// Drop `[front, mid]`; the answer lies strictly right of `mid`.
    pub fn discard_left(&mut self, mid: usize) {
        self.front = mid + 1;
    }

    /// Drop `[mid, back]`. Returns `false` when nothing remains left of
    /// `mid`, i.e. `mid` was index 0 and the window is exhausted.
    pub fn discard_right(&mut self, mid: usize) -> bool {
        match mid.checked_sub(1) {
            Some(back) => {
                self.back = back;
                true
            }
            None => false,
        }
    }

    pub fn advance_front(&mut self) {
        self.front += 1;
    }

    pub fn retreat_back(&mut self) {
        self.back -= 1;
    }

    pub fn step_inward(&mut self) {
        self.advance_front();
        self.retreat_back();
    }
}
