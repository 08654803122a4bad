/// Reference model backed by a plain `Vec`, used to cross-check `DynamicArray`
/// and as an additional benchmark combatant.
pub struct PlainArray<T> {
    data: Vec<T>,
}

#[allow(dead_code)]
impl<T> PlainArray<T>
where
    T: Clone + std::fmt::Debug,
{
    pub fn new(capacity: usize) -> PlainArray<T> {
        PlainArray {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn append(&mut self, t: T) -> bool {
        self.data.push(t);
        true
    }

    pub fn insert_at(&mut self, index: usize, t: T) -> bool {
        if index <= self.data.len() {
            self.data.insert(index, t);
            true
        } else {
            false
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn set(&mut self, index: usize, t: T) -> bool {
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = t;
                true
            }
            None => false,
        }
    }

    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.data.sort_unstable();
    }

    pub fn collect(&self) -> Vec<T> {
        self.data.clone()
    }
}
