//! The three container kinds under test and the kernels run over them.

use std::collections::{LinkedList, VecDeque};
use std::fmt::Write as _;
use std::hint::black_box;

use crate::config::DataType;

/// Container kinds in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Vec,
    VecDeque,
    LinkedList,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [
        ContainerKind::Vec,
        ContainerKind::VecDeque,
        ContainerKind::LinkedList,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Vec => "Vec",
            ContainerKind::VecDeque => "VecDeque",
            ContainerKind::LinkedList => "LinkedList",
        }
    }
}

/// Independent copies of the sample, one per container kind.
#[derive(Debug, Clone, Default)]
pub struct ContainerSet {
    pub vec: Vec<DataType>,
    pub deque: VecDeque<DataType>,
    pub list: LinkedList<DataType>,
}

impl ContainerSet {
    /// Untimed copy of `src` into every container.
    pub fn copy_from(src: &[DataType]) -> Self {
        Self {
            vec: src.to_vec(),
            deque: src.iter().copied().collect(),
            list: src.iter().copied().collect(),
        }
    }

    pub fn len_of(&self, kind: ContainerKind) -> usize {
        match kind {
            ContainerKind::Vec => self.vec.len(),
            ContainerKind::VecDeque => self.deque.len(),
            ContainerKind::LinkedList => self.list.len(),
        }
    }

    /// Every container holds exactly `src`, in order.
    pub fn matches(&self, src: &[DataType]) -> bool {
        self.vec == src
            && self.deque.len() == src.len()
            && self.list.len() == src.len()
            && self.deque.iter().eq(src.iter())
            && self.list.iter().eq(src.iter())
    }
}

/// Append every element of `src` to `dst`, in order.
pub fn copy_into<C: Extend<DataType>>(dst: &mut C, src: &[DataType]) {
    dst.extend(src.iter().copied());
}

/// Traverse `container` front to back `repeats` times.
///
/// Each visited value passes through [`black_box`] so the loads cannot be
/// elided. Returns the number of elements visited.
pub fn read_sequential<'a, C>(container: &'a C, repeats: usize) -> usize
where
    &'a C: IntoIterator<Item = &'a DataType>,
{
    let mut visited = 0usize;
    for _ in 0..repeats {
        for value in container {
            black_box(*value);
            visited += 1;
        }
    }
    black_box(visited)
}

/// `"<label>: v1 v2 ... vK "`, with K capped at the container's length.
pub fn first_n<'a, C>(label: &str, container: &'a C, n: usize) -> String
where
    &'a C: IntoIterator<Item = &'a DataType>,
{
    let mut line = format!("{}: ", label);
    for value in container.into_iter().take(n) {
        let _ = write!(line, "{} ", value);
    }
    line
}
