use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector
///
/// Storage is allocated once at construction and never grows.
/// The stack pointer is the index of the next free slot, so the top
/// of the stack is `sp() - 1`.

pub struct Stack<T> {
    overflow_message: &'static str,
    capacity: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    /// Fails instead of aborting when `capacity` slots cannot be reserved.
    pub fn new(capacity: usize, overflow_message: &'static str) -> Result<Stack<T>> {
        let mut vec = Vec::new();
        if vec.try_reserve_exact(capacity).is_err() {
            return Err(error!(StackOverflow; &format!("CANNOT RESERVE {} SLOTS", capacity)));
        }
        Ok(Stack {
            overflow_message,
            capacity,
            vec,
        })
    }
    pub fn sp(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.vec.len() >= self.capacity
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.is_full() {
            return Err(error!(StackOverflow; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(error!(StackUnderflow)),
        }
    }
    /// Pops the right operand first; returns `(lhs, rhs)`.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(error!(StackUnderflow));
        }
        let two = self.pop()?;
        let one = self.pop()?;
        Ok((one, two))
    }
}
