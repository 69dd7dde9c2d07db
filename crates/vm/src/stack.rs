//! Call stack for grammar-rule subroutines.
//!
//! A root frame exists before the first CLL so that GN1/GN2 work at the
//! top level. It cannot be popped and does not count against capacity.

use thiserror::Error;

/// One subroutine activation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Symbol generated by the first GN1 in this activation.
    pub label1: Option<String>,
    /// Symbol generated by the first GN2 in this activation.
    pub label2: Option<String>,
    /// Instruction to resume at after the matching R.
    pub return_address: usize,
}

/// Stack discipline violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackFault {
    #[error("call stack overflow")]
    Overflow,
    #[error("call stack underflow")]
    Underflow,
}

/// Bounded stack of call frames.
#[derive(Debug, Clone)]
pub struct CallStack {
    root: Frame,
    frames: Vec<Frame>,
    capacity: usize,
}

impl CallStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            root: Frame::default(),
            frames: Vec::new(),
            capacity,
        }
    }

    /// Push a frame with blank label slots.
    pub fn push(&mut self, return_address: usize) -> Result<(), StackFault> {
        if self.frames.len() >= self.capacity {
            return Err(StackFault::Overflow);
        }
        self.frames.push(Frame {
            return_address,
            ..Frame::default()
        });
        Ok(())
    }

    /// Pop the top frame and return its return address.
    pub fn pop(&mut self) -> Result<usize, StackFault> {
        self.frames
            .pop()
            .map(|frame| frame.return_address)
            .ok_or(StackFault::Underflow)
    }

    /// The innermost activation, or the root frame before any CLL.
    pub fn current_frame(&mut self) -> &mut Frame {
        self.frames.last_mut().unwrap_or(&mut self.root)
    }

    /// Number of pushed frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_pop_returns_address() {
        let mut stack = CallStack::new(4);
        stack.push(7).unwrap();
        stack.push(12).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Ok(12));
        assert_eq!(stack.pop(), Ok(7));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn underflow_on_empty() {
        let mut stack = CallStack::new(4);
        assert_eq!(stack.pop(), Err(StackFault::Underflow));
    }

    #[test]
    fn overflow_at_capacity() {
        let mut stack = CallStack::new(2);
        stack.push(0).unwrap();
        stack.push(0).unwrap();
        assert_eq!(stack.push(0), Err(StackFault::Overflow));
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn fault_messages() {
        assert_eq!(StackFault::Overflow.to_string(), "call stack overflow");
        assert_eq!(StackFault::Underflow.to_string(), "call stack underflow");
    }

    #[test]
    fn new_frame_has_blank_slots() {
        let mut stack = CallStack::new(4);
        stack.current_frame().label1 = Some("A0".to_string());
        stack.push(3).unwrap();
        let frame = stack.current_frame();
        assert_eq!(frame.label1, None);
        assert_eq!(frame.label2, None);
        assert_eq!(frame.return_address, 3);
    }

    #[test]
    fn root_frame_survives_calls() {
        let mut stack = CallStack::new(4);
        stack.current_frame().label2 = Some("A5".to_string());
        stack.push(1).unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.current_frame().label2.as_deref(), Some("A5"));
    }
}
