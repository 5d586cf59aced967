/// Majority filter over the last `N` samples of a digital line.
#[derive(Debug, Eq, PartialEq, defmt::Format)]
pub struct Debounced<const N: usize> {
    buffer: DebounceBuffer<N>,
    active: bool,
}

/// Change of the debounced level.
#[derive(Debug, Clone, Copy, Eq, PartialEq, defmt::Format)]
pub enum Edge {
    Rising,
    Falling,
}

impl<const N: usize> Debounced<N> {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            buffer: DebounceBuffer::new(),
            active: false,
        }
    }

    /// Feed a raw sample, returning the edge if the filtered level flipped.
    pub fn update(&mut self, value: bool) -> Option<Edge> {
        self.buffer.write(value);
        let was_active = self.active;
        self.active = self.buffer.read();
        match (was_active, self.active) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Eq, PartialEq, defmt::Format)]
struct DebounceBuffer<const N: usize> {
    buffer: [bool; N],
    pointer: usize,
}

impl<const N: usize> DebounceBuffer<N> {
    fn new() -> Self {
        Self {
            buffer: [false; N],
            pointer: 0,
        }
    }

    fn write(&mut self, value: bool) {
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
    }

    fn read(&self) -> bool {
        let up: usize = self.buffer.iter().filter(|i| **i).count();
        up > N / 2
    }
}
