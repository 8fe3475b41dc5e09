use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lineal::collections::{Queue, Stack};
use lineal::lists::{DoublyLinkedList, SinglyLinkedList};

const ITEMS: usize = 1000;

fn singly_push_back(c: &mut Criterion) {
    c.bench_function("singly-push-back", |b| {
        b.iter(|| {
            let mut list = SinglyLinkedList::new();
            for i in 0..ITEMS {
                list.push_back(black_box(i));
            }
            black_box(list.len())
        })
    });
}

fn doubly_push_pop(c: &mut Criterion) {
    c.bench_function("doubly-push-pop", |b| {
        b.iter(|| {
            let mut list = DoublyLinkedList::new();
            for i in 0..ITEMS {
                list.push_back(black_box(i));
            }
            while list.pop_front().is_some() {}
            black_box(list.is_empty())
        })
    });
}

fn stack_push_pop(c: &mut Criterion) {
    c.bench_function("stack-push-pop", |b| {
        b.iter(|| {
            let mut stack = Stack::new();
            for i in 0..ITEMS {
                stack.push(black_box(i));
            }
            while stack.pop().is_some() {}
            black_box(stack.is_empty())
        })
    });
}

fn queue_push_pop(c: &mut Criterion) {
    c.bench_function("queue-push-pop", |b| {
        b.iter(|| {
            let mut queue = Queue::new();
            for i in 0..ITEMS {
                queue.push(black_box(i));
            }
            while queue.pop().is_some() {}
            black_box(queue.is_empty())
        })
    });
}

criterion_group!(
    benches,
    singly_push_back,
    doubly_push_pop,
    stack_push_pop,
    queue_push_pop
);
criterion_main!(benches);
