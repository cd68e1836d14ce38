// Cart state - books the visitor intends to buy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub title: String,
    pub author: String,
    pub price_cents: u32,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price_cents: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price_cents,
            quantity: 1,
        }
    }

    pub fn subtotal_cents(&self) -> u32 {
        self.price_cents.saturating_mul(self.quantity)
    }
}

#[derive(Default)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line, merging with an existing line for the same title.
    pub fn add(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|l| l.title == line.title) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
        tracing::debug!(items = self.item_count(), "cart updated");
    }

    pub fn remove(&mut self, index: usize) -> Option<CartLine> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_cents(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.subtotal_cents()))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_same_title() {
        let mut cart = CartState::new();
        cart.add(CartLine::new("Dune", "Frank Herbert", 650));
        cart.add(CartLine::new("Emma", "Jane Austen", 300));
        cart.add(CartLine::new("Dune", "Frank Herbert", 650));

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total_cents(), 1600);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut cart = CartState::new();
        cart.add(CartLine::new("Emma", "Jane Austen", 300));
        assert_eq!(cart.remove(3), None);
        assert_eq!(cart.remove(0).map(|l| l.title), Some("Emma".to_string()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add(CartLine::new("Emma", "Jane Austen", 300));
        cart.clear();
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total_cents(), 0);
    }
}
