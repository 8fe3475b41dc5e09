/*
   Lineal Lists: Singly and doubly linked lists that own their nodes
   and keep a running length for constant time size queries.

   Copyright 2026 "The Lineal Project Developers"

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/

use std::ptr;

// The list owns every node it links; `prev` is a plain back pointer
// used for traversal and unlinking, never for release.
#[derive(Debug, PartialEq, Eq)]
pub(super) struct Node<T> {
    pub(super) val: T,
    pub(super) prev: *mut Node<T>,
    pub(super) next: *mut Node<T>,
}

impl<T> Node<T> {
    pub(super) fn new(val: T) -> Node<T> {
        Node {
            val,
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let node = Node::new(11);
        assert_eq!(node.val, 11);
        assert!(node.prev.is_null());
        assert!(node.next.is_null());
    }
}
