//! Index-based doubly linked list
//!
//! Nodes are indices into a link arena owned by the caller. Several lists
//! can share one arena as long as each node is on at most one list.

/// Per-node links stored in the shared arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Link {
    prev: Option<usize>,
    next: Option<usize>,
}

impl Link {
    pub const UNLINKED: Self = Self {
        prev: None,
        next: None,
    };
}

/// Head/tail of one list over a [`Link`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexList {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl IndexList {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<usize> {
        self.head
    }

    pub fn back(&self) -> Option<usize> {
        self.tail
    }

    pub fn push_back(&mut self, links: &mut [Link], node: usize) {
        links[node] = Link {
            prev: self.tail,
            next: None,
        };
        match self.tail {
            Some(tail) => links[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    pub fn push_front(&mut self, links: &mut [Link], node: usize) {
        links[node] = Link {
            prev: None,
            next: self.head,
        };
        match self.head {
            Some(head) => links[head].prev = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self, links: &mut [Link]) -> Option<usize> {
        let node = self.head?;
        self.remove(links, node);
        Some(node)
    }

    pub fn pop_back(&mut self, links: &mut [Link]) -> Option<usize> {
        let node = self.tail?;
        self.remove(links, node);
        Some(node)
    }

    /// Unlink `node`, which must be on this list
    pub fn remove(&mut self, links: &mut [Link], node: usize) {
        let Link { prev, next } = links[node];
        match prev {
            Some(prev) => links[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => links[next].prev = prev,
            None => self.tail = prev,
        }
        links[node] = Link::UNLINKED;
        self.len -= 1;
    }

    /// Node at position `pos` from the front
    pub fn get(&self, links: &[Link], pos: usize) -> Option<usize> {
        self.iter(links).nth(pos)
    }

    /// Nodes front to back
    pub fn iter<'l>(&self, links: &'l [Link]) -> Iter<'l> {
        Iter {
            links,
            cursor: self.head,
        }
    }
}

pub struct Iter<'l> {
    links: &'l [Link],
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let node = self.cursor?;
        self.cursor = self.links[node].next;
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    fn collect(list: &IndexList, links: &[Link]) -> Vec<usize> {
        list.iter(links).collect()
    }

    #[test]
    fn test_push_both_ends() {
        let mut links = [Link::UNLINKED; 6];
        let mut list = IndexList::new();
        list.push_back(&mut links, 2);
        list.push_back(&mut links, 4);
        list.push_front(&mut links, 0);
        assert_eq!(collect(&list, &links), [0, 2, 4]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(0));
        assert_eq!(list.back(), Some(4));
    }

    #[test]
    fn test_remove_middle_and_ends() {
        let mut links = [Link::UNLINKED; 5];
        let mut list = IndexList::new();
        for node in 0..5 {
            list.push_back(&mut links, node);
        }
        list.remove(&mut links, 2);
        assert_eq!(collect(&list, &links), [0, 1, 3, 4]);
        list.remove(&mut links, 0);
        list.remove(&mut links, 4);
        assert_eq!(collect(&list, &links), [1, 3]);
        assert_eq!(list.get(&links, 1), Some(3));
        assert_eq!(list.get(&links, 2), None);
    }

    #[test]
    fn test_pop_until_empty() {
        let mut links = [Link::UNLINKED; 3];
        let mut list = IndexList::new();
        list.push_back(&mut links, 1);
        list.push_back(&mut links, 0);
        assert_eq!(list.pop_back(&mut links), Some(0));
        assert_eq!(list.pop_front(&mut links), Some(1));
        assert_eq!(list.pop_front(&mut links), None);
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    fn test_two_lists_share_arena() {
        let mut links = [Link::UNLINKED; 4];
        let mut evens = IndexList::new();
        let mut odds = IndexList::new();
        for node in 0..4 {
            if node % 2 == 0 {
                evens.push_back(&mut links, node);
            } else {
                odds.push_back(&mut links, node);
            }
        }
        // Move a node across lists
        let moved = evens.pop_front(&mut links).unwrap();
        odds.push_back(&mut links, moved);
        assert_eq!(collect(&evens, &links), [2]);
        assert_eq!(collect(&odds, &links), [1, 3, 0]);
    }
}
