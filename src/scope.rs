// This module provides the scope environment: a chained name-to-storage-location mapping
// supporting nested lexical scopes. Frames live in an arena (a plain Vec) and refer to
// their enclosing frame by index, so the chain is acyclic and finite by construction and
// nothing leaks on scope exit — popping just moves the cursor back to the parent index
// and abandons the old frame in the arena, which is safe because no frame is referenced
// after its lexical scope ends. Lookups walk innermost to outermost and stop at the first
// match, so shadowing an outer binding inside a nested block is legal and never touches
// the outer frame. StorageSlot pairs the alloca pointer with the declared width and
// signedness fixed at binding creation; values cast to this declared type on every store.

//! Lexical scope environment mapping names to storage locations.

use inkwell::types::IntType;
use inkwell::values::PointerValue;
use std::collections::HashMap;

/// A storage location created per `let` binding or function parameter.
///
/// The declared width and signedness are fixed at creation and may differ
/// from the native type of any value later assigned to the slot.
#[derive(Debug, Clone, Copy)]
pub struct StorageSlot<'ctx> {
    pub ptr: PointerValue<'ctx>,
    pub ty: IntType<'ctx>,
    pub signed: bool,
}

/// One lexical frame: bindings plus the index of the enclosing frame.
#[derive(Debug, Default)]
struct Frame<'ctx> {
    bindings: HashMap<String, StorageSlot<'ctx>>,
    parent: Option<usize>,
}

/// Arena-backed stack of scope frames.
///
/// Created with a single root frame. `push` and `pop` must be paired around
/// every block and function body, unconditionally, regardless of how body
/// generation completes.
#[derive(Debug)]
pub struct ScopeStack<'ctx> {
    frames: Vec<Frame<'ctx>>,
    current: usize,
}

impl<'ctx> ScopeStack<'ctx> {
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::default()],
            current: 0,
        }
    }

    /// Enter a new innermost frame whose parent is the current frame.
    pub fn push(&mut self) {
        self.frames.push(Frame {
            bindings: HashMap::new(),
            parent: Some(self.current),
        });
        self.current = self.frames.len() - 1;
    }

    /// Revert to the enclosing frame. The abandoned frame stays in the arena.
    pub fn pop(&mut self) {
        debug_assert!(self.frames[self.current].parent.is_some(), "pop past root frame");
        if let Some(parent) = self.frames[self.current].parent {
            self.current = parent;
        }
    }

    /// Insert or overwrite `name` in the innermost frame only.
    pub fn define(&mut self, name: &str, slot: StorageSlot<'ctx>) {
        self.frames[self.current]
            .bindings
            .insert(name.to_string(), slot);
    }

    /// Search innermost to outermost; `None` once the chain is exhausted.
    pub fn get(&self, name: &str) -> Option<StorageSlot<'ctx>> {
        let mut frame = self.current;
        loop {
            if let Some(slot) = self.frames[frame].bindings.get(name) {
                return Some(*slot);
            }
            frame = self.frames[frame].parent?;
        }
    }
}

impl<'ctx> Default for ScopeStack<'ctx> {
    fn default() -> Self {
        Self::new()
    }
}
