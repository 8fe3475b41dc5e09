/*
   Lineal Collections: Sequence backed containers - a stack and a
   queue that expose a fixed end and fail explicitly when empty.

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

//! Sequence backed containers that expose a fixed end: a
//! last-in-first-out stack and a first-in-first-out queue. Both
//! remove from their documented end in constant time and signal
//! empty access with `None` instead of reading out of bounds.
pub mod queue;
pub mod stack;
