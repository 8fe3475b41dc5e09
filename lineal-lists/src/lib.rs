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

//! Node based list data structures: a singly linked list built on an
//! owned forward chain and a doubly linked list with head and tail
//! pointers for constant time pushes and pops at either end.
pub mod doubly;
pub mod singly;
