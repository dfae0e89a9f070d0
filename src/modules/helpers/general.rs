pub struct Helpers {}

impl Helpers {
    /// Drop duplicates while keeping the first occurrence order.
    pub fn dedupe_preserving_order<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
        let mut unique = Vec::new();
        for item in items {
            if !unique.contains(item) {
                unique.push(item.to_owned());
            }
        }

        unique
    }
}
