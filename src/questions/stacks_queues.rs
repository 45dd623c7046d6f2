//! Chapter 3: stacks and queues.

use log::debug;

use crate::error::{Result, StructureError};
use crate::queue::{AnyQueue, LinkedQueue};
use crate::stack::{AnyStack, LinkedStack};

// --- 3.2 MinStack ---

/// A stack that reports its minimum in O(1).
///
/// A second stack holds every value that was a minimum when pushed; equal
/// values are pushed again so duplicates of the minimum survive a pop.
pub struct MinStack<T> {
    items: LinkedStack<T>,
    mins: LinkedStack<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            items: LinkedStack::new(),
            mins: LinkedStack::new(),
        }
    }

    pub fn min(&self) -> Option<&T> {
        self.mins.peek().ok()
    }
}

impl<T: Ord + Clone> AnyStack<T> for MinStack<T> {
    fn peek(&self) -> Result<&T> {
        self.items.peek()
    }

    fn push(&mut self, elem: T) {
        if self.mins.peek().map_or(true, |min| elem <= *min) {
            self.mins.push(elem.clone());
        }
        self.items.push(elem);
    }

    fn pop(&mut self) -> Result<T> {
        let value = self.items.pop()?;
        if self.mins.peek().is_ok_and(|min| *min == value) {
            self.mins.pop()?;
        }
        Ok(value)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
        self.mins.clear();
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- 3.3 SetOfStacks ---

/// A stack split into fixed-capacity stacks of `N` elements each.
///
/// Only the last stack is ever partly filled: `pop_at` rolls the bottom of
/// every later stack one place left to close the gap.
pub struct SetOfStacks<T, const N: usize> {
    stacks: Vec<heapless::Vec<T, N>>,
}

impl<T, const N: usize> SetOfStacks<T, N> {
    pub fn new() -> Self {
        const { assert!(N > 0, "SetOfStacks capacity must be non-zero") };
        Self { stacks: Vec::new() }
    }

    pub fn push_all<I: IntoIterator<Item = T>>(&mut self, elems: I) {
        for elem in elems {
            AnyStack::push(self, elem);
        }
    }

    /// Pops the top of stack `index` and shifts later elements down to fill it.
    pub fn pop_at(&mut self, index: usize) -> Result<T> {
        let count = self.stacks.len();
        if index >= count {
            return Err(StructureError::out_of_bounds(index, count));
        }
        let top = self.stacks[index]
            .pop()
            .ok_or_else(|| StructureError::empty("Stack"))?;
        for j in index + 1..count {
            let bottom = self.stacks[j].remove(0);
            let moved = self.stacks[j - 1].push(bottom);
            debug_assert!(moved.is_ok(), "stack {} had a free slot", j - 1);
        }
        if self.stacks.last().is_some_and(|s| s.is_empty()) {
            self.stacks.pop();
        }
        Ok(top)
    }

    pub fn number_of_stacks(&self) -> usize {
        self.stacks.len()
    }

    fn start_stack(&mut self, elem: T) {
        let mut stack = heapless::Vec::new();
        // N > 0 is checked at compile time, so a new stack has room.
        if stack.push(elem).is_ok() {
            debug!(
                "set of stacks: starting stack {} (capacity {})",
                self.stacks.len(),
                N
            );
            self.stacks.push(stack);
        }
    }
}

impl<T, const N: usize> AnyStack<T> for SetOfStacks<T, N> {
    fn peek(&self) -> Result<&T> {
        self.stacks
            .last()
            .and_then(|s| s.last())
            .ok_or_else(|| StructureError::empty("Stack"))
    }

    fn push(&mut self, elem: T) {
        let rejected = match self.stacks.last_mut() {
            Some(last) => last.push(elem).err(),
            None => Some(elem),
        };
        if let Some(elem) = rejected {
            self.start_stack(elem);
        }
    }

    fn pop(&mut self) -> Result<T> {
        let last = self
            .stacks
            .last_mut()
            .ok_or_else(|| StructureError::empty("Stack"))?;
        let value = last.pop().ok_or_else(|| StructureError::empty("Stack"))?;
        if last.is_empty() {
            self.stacks.pop();
        }
        Ok(value)
    }

    fn len(&self) -> usize {
        self.stacks.iter().map(|s| s.len()).sum()
    }

    fn clear(&mut self) {
        self.stacks.clear();
    }
}

impl<T, const N: usize> Default for SetOfStacks<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// --- 3.4 StackQueue ---

/// A FIFO queue made of two stacks. New items land on `incoming`; `outgoing`
/// is refilled, reversed, only when it runs dry.
pub struct StackQueue<T> {
    incoming: LinkedStack<T>,
    outgoing: LinkedStack<T>,
}

impl<T> StackQueue<T> {
    pub fn new() -> Self {
        Self {
            incoming: LinkedStack::new(),
            outgoing: LinkedStack::new(),
        }
    }

    fn shift(&mut self) {
        if self.outgoing.is_empty() {
            while let Ok(value) = self.incoming.pop() {
                self.outgoing.push(value);
            }
        }
    }
}

impl<T> AnyQueue<T> for StackQueue<T> {
    fn peek(&self) -> Result<&T> {
        // Without shifting, the oldest item is the bottom of `incoming`.
        match self.outgoing.peek() {
            Ok(front) => Ok(front),
            Err(_) => self
                .incoming
                .iter()
                .last()
                .ok_or_else(|| StructureError::empty("Queue")),
        }
    }

    fn enqueue(&mut self, elem: T) {
        self.incoming.push(elem);
    }

    fn dequeue(&mut self) -> Result<T> {
        self.shift();
        self.outgoing
            .pop()
            .map_err(|_| StructureError::empty("Queue"))
    }

    fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    fn clear(&mut self) {
        self.incoming.clear();
        self.outgoing.clear();
    }
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- 3.5 Sort Stack ---

/// Sorts `stack` so the smallest element is on top, using one extra stack.
pub fn sort_stack<T: Ord>(stack: &mut impl AnyStack<T>) {
    let mut temp = LinkedStack::new();
    while let Ok(value) = stack.pop() {
        // `temp` stays sorted with its largest element on top.
        while temp.peek().is_ok_and(|top| *top > value) {
            if let Ok(moved) = temp.pop() {
                stack.push(moved);
            }
        }
        temp.push(value);
    }
    while let Ok(value) = temp.pop() {
        stack.push(value);
    }
}

// --- 3.6 Animal Shelter ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub species: Species,
}

impl Animal {
    pub fn dog(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: Species::Dog,
        }
    }

    pub fn cat(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            species: Species::Cat,
        }
    }
}

/// A first-in first-out shelter for dogs and cats.
#[derive(Default)]
pub struct AnimalShelter {
    dogs: LinkedQueue<(u64, Animal)>,
    cats: LinkedQueue<(u64, Animal)>,
    arrivals: u64,
}

impl AnimalShelter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_animal(&mut self, animal: Animal) {
        let ticket = (self.arrivals, animal);
        self.arrivals += 1;
        match ticket.1.species {
            Species::Dog => self.dogs.enqueue(ticket),
            Species::Cat => self.cats.enqueue(ticket),
        }
    }

    /// The animal that has waited longest, of either species.
    pub fn adopt_any(&mut self) -> Result<Animal> {
        let dog = self.dogs.peek().ok().map(|(arrival, _)| *arrival);
        let cat = self.cats.peek().ok().map(|(arrival, _)| *arrival);
        match (dog, cat) {
            (Some(dog), Some(cat)) if dog < cat => self.adopt_dog(),
            (_, Some(_)) => self.adopt_cat(),
            (Some(_), None) => self.adopt_dog(),
            (None, None) => Err(StructureError::empty("Animal shelter")),
        }
    }

    pub fn adopt_dog(&mut self) -> Result<Animal> {
        self.dogs
            .dequeue()
            .map(|(_, animal)| animal)
            .map_err(|_| StructureError::empty("Dog queue"))
    }

    pub fn adopt_cat(&mut self) -> Result<Animal> {
        self.cats
            .dequeue()
            .map(|(_, animal)| animal)
            .map_err(|_| StructureError::empty("Cat queue"))
    }

    pub fn len(&self) -> usize {
        self.dogs.len() + self.cats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::ArrayStack;

    #[test]
    fn test_min_stack() {
        let mut stack = MinStack::new();
        assert_eq!(stack.min(), None);
        stack.push(3);
        stack.push(4);
        stack.push(-1);
        assert_eq!(stack.min(), Some(&-1));
        stack.push(5);
        stack.push(-10);
        assert_eq!(stack.min(), Some(&-10));
        assert_eq!(stack.pop(), Ok(-10));
        assert_eq!(stack.min(), Some(&-1));
        assert_eq!(stack.pop(), Ok(5));
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_min_stack_duplicate_minimum() {
        let mut stack = MinStack::new();
        stack.push(2);
        stack.push(1);
        stack.push(1);
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.min(), Some(&1));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.min(), Some(&2));
        stack.clear();
        assert_eq!(stack.min(), None);
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_set_of_stacks_capacity_three() {
        let mut stack: SetOfStacks<i32, 3> = SetOfStacks::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Ok(&2));
        stack.push(3);
        stack.push(4);
        assert_eq!(stack.len(), 4);
        assert_eq!(stack.number_of_stacks(), 2);
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.number_of_stacks(), 1);

        stack.push_all([4, 5, 6, 7, 8]);
        assert_eq!(stack.len(), 8);
        assert_eq!(stack.pop_at(1), Ok(6));
        assert_eq!(stack.pop_at(1), Ok(7));
        assert_eq!(stack.number_of_stacks(), 2);
        stack.push(9);
        assert_eq!(stack.pop_at(2), Ok(9));
        assert_eq!(stack.pop_at(2), Err(StructureError::out_of_bounds(2, 2)));

        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), Err(StructureError::empty("Stack")));
        assert_eq!(stack.pop(), Err(StructureError::empty("Stack")));
    }

    #[test]
    fn test_set_of_stacks_rolls_left() {
        let mut stack: SetOfStacks<i32, 5> = SetOfStacks::new();
        stack.push_all(1..=12);
        assert_eq!(stack.pop_at(0), Ok(5));
        assert_eq!(stack.pop_at(0), Ok(6));
        assert_eq!(stack.len(), 10);
        assert_eq!(stack.number_of_stacks(), 2);
        let drained: Vec<i32> = std::iter::from_fn(|| stack.pop().ok()).collect();
        assert_eq!(drained, [12, 11, 10, 9, 8, 7, 4, 3, 2, 1]);

        stack.push_all([1, 2]);
        stack.pop().unwrap();
        stack.pop().unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_queue() {
        let mut queue = StackQueue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.peek(), Ok(&2));

        queue.enqueue(4);
        queue.enqueue(5);
        queue.enqueue(6);
        assert_eq!(queue.peek(), Ok(&2));
        let rest: Vec<i32> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(rest, [2, 3, 4, 5, 6]);

        queue.enqueue(7);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), Err(StructureError::empty("Queue")));
        assert_eq!(queue.dequeue(), Err(StructureError::empty("Queue")));
    }

    #[test]
    fn test_sort_stack() {
        let mut stack: ArrayStack<i32> = [10, 7, 8, 15, -2, -4, 10, 2].into_iter().collect();
        sort_stack(&mut stack);
        let top_down: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(top_down, [-4, -2, 2, 7, 8, 10, 10, 15]);

        let mut linked: LinkedStack<i32> = LinkedStack::new();
        sort_stack(&mut linked);
        assert!(linked.is_empty());
    }

    #[test]
    fn test_animal_shelter() {
        let mut shelter = AnimalShelter::new();
        shelter.add_animal(Animal::dog("a"));
        shelter.add_animal(Animal::dog("b"));
        shelter.add_animal(Animal::cat("c"));
        assert_eq!(shelter.adopt_any().unwrap().name, "a");
        assert_eq!(shelter.adopt_cat().unwrap().name, "c");

        shelter.add_animal(Animal::cat("sheldon"));
        for name in ["d", "e", "f"] {
            shelter.add_animal(Animal::dog(name));
        }
        for expected in ["b", "sheldon", "d", "e", "f"] {
            assert_eq!(shelter.adopt_any().unwrap().name, expected);
        }

        shelter.add_animal(Animal::cat("x"));
        shelter.add_animal(Animal::cat("y"));
        assert_eq!(shelter.adopt_any().unwrap(), Animal::cat("x"));
        assert_eq!(shelter.adopt_cat().unwrap().name, "y");

        assert!(shelter.is_empty());
        assert_eq!(
            shelter.adopt_any(),
            Err(StructureError::empty("Animal shelter"))
        );
        assert_eq!(shelter.adopt_dog(), Err(StructureError::empty("Dog queue")));
    }
}
