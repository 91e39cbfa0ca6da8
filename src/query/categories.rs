use crate::models::Transaction;

/// Per-category transaction counts, kept in the order the categories were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: Vec<(String, usize)>
}

impl CategoryCounts {
    pub fn get(&self, category: &str) -> Option<usize> {
        self.counts.iter()
            .find(|(label, _)| label == category)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Counts, for each category label, the transactions whose description contains it
/// (ignoring case).
///
/// Labels are not exclusive: one transaction can count towards several categories.
/// Every label appears in the result, with zero when nothing matched. Repeated labels
/// are collapsed to their first occurrence.
pub fn count_by_category<S: AsRef<str>>(transactions: &[Transaction], categories: &[S]) -> CategoryCounts {
    let mut counts: Vec<(String, usize)> = Vec::with_capacity(categories.len());

    for category in categories {
        let category = category.as_ref();

        if counts.iter().all(|(label, _)| label != category) {
            counts.push((category.to_string(), 0));
        }
    }

    let needles: Vec<String> = counts.iter().map(|(label, _)| label.to_lowercase()).collect();

    for transaction in transactions {
        let description = transaction.description.as_deref().unwrap_or_default().to_lowercase();

        for ((_, count), needle) in counts.iter_mut().zip(&needles) {
            if description.contains(needle.as_str()) {
                *count += 1;
            }
        }
    }

    CategoryCounts { counts }
}
